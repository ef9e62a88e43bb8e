//! In-memory entity store.
//!
//! Implements both store traits over plain maps. Hosts use it for headless
//! sessions and fixtures; every successful mutation is appended to a public
//! log so callers can verify exactly what the sketch area asked for.

use super::{
    CreatedClassifier, NewClassifier, NewDiagram, NewFeature, NewRelationship, StoreReader,
    StoreWriter, UndoMode,
};
use crate::error::{Result, StoreError};
use crate::ids::{EntityRef, Table, VOID_ROW};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramRow {
    #[serde(default = "void_row")]
    pub parent: i64,
    pub name: String,
    #[serde(default)]
    pub list_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierRow {
    pub name: String,
    #[serde(default)]
    pub x_order: i32,
    #[serde(default)]
    pub y_order: i32,
    #[serde(default)]
    pub list_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRow {
    pub diagram: i64,
    pub classifier: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub classifier: i64,
    pub name: String,
    #[serde(default)]
    pub list_order: i32,
    #[serde(default)]
    pub position: Option<(i32, i32)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipRow {
    pub from_classifier: i64,
    #[serde(default = "void_row")]
    pub from_feature: i64,
    pub to_classifier: i64,
    #[serde(default = "void_row")]
    pub to_feature: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub list_order: i32,
}

fn void_row() -> i64 {
    VOID_ROW
}

fn row_ref(table: Table, row: i64) -> EntityRef {
    if row == VOID_ROW {
        EntityRef::VOID
    } else {
        EntityRef::new(table, row)
    }
}

/// Serializable table contents of a [`MemoryStore`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    #[serde(default)]
    pub diagrams: BTreeMap<i64, DiagramRow>,
    #[serde(default)]
    pub classifiers: BTreeMap<i64, ClassifierRow>,
    #[serde(default)]
    pub elements: BTreeMap<i64, ElementRow>,
    #[serde(default)]
    pub features: BTreeMap<i64, FeatureRow>,
    #[serde(default)]
    pub relationships: BTreeMap<i64, RelationshipRow>,
}

/// One successful mutation, as recorded by [`MemoryStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    CreateDiagram {
        diagram: EntityRef,
        parent: EntityRef,
        undo: UndoMode,
    },
    CreateClassifier {
        classifier: EntityRef,
        element: EntityRef,
        diagram: EntityRef,
        parent_classifier: EntityRef,
        x_order: i32,
        y_order: i32,
        undo: UndoMode,
    },
    CreateFeature {
        feature: EntityRef,
        classifier: EntityRef,
        list_order: i32,
        position: Option<(i32, i32)>,
        undo: UndoMode,
    },
    CreateRelationship {
        relationship: EntityRef,
        from_classifier: EntityRef,
        to_classifier: EntityRef,
        list_order: i32,
        undo: UndoMode,
    },
    UpdateClassifierListOrder {
        classifier: EntityRef,
        list_order: i32,
        undo: UndoMode,
    },
    UpdateClassifierXYOrder {
        classifier: EntityRef,
        x_order: i32,
        y_order: i32,
        undo: UndoMode,
    },
    UpdateFeatureListOrder {
        feature: EntityRef,
        list_order: i32,
        undo: UndoMode,
    },
    UpdateRelationshipListOrder {
        relationship: EntityRef,
        list_order: i32,
        undo: UndoMode,
    },
    UpdateDiagramListOrder {
        diagram: EntityRef,
        list_order: i32,
        undo: UndoMode,
    },
    UpdateDiagramParent {
        diagram: EntityRef,
        parent: EntityRef,
        undo: UndoMode,
    },
}

/// Map-backed implementation of [`StoreReader`] and [`StoreWriter`]
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tables: Tables,
    open: bool,
    next_row: i64,
    mutations: Vec<Mutation>,
}

impl MemoryStore {
    /// Creates an empty, open store.
    pub fn new() -> Self {
        Self::with_tables(Tables::default())
    }

    /// Creates an open store holding `tables`.
    pub fn with_tables(tables: Tables) -> Self {
        let next_row = [
            tables.diagrams.keys().max(),
            tables.classifiers.keys().max(),
            tables.elements.keys().max(),
            tables.features.keys().max(),
            tables.relationships.keys().max(),
        ]
        .into_iter()
        .flatten()
        .max()
        .map_or(1, |max| max + 1);

        Self {
            tables,
            open: true,
            next_row,
            mutations: Vec::new(),
        }
    }

    /// Loads a store from a JSON fixture of [`Tables`].
    pub fn from_json(json: &str) -> Result<Self> {
        let tables: Tables = serde_json::from_str(json)?;
        Ok(Self::with_tables(tables))
    }

    /// Serializes the table contents to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.tables)?)
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Mutations issued through [`StoreWriter`] so far, oldest first.
    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    /// Inserts a diagram directly, bypassing the mutation log.
    pub fn insert_diagram(&mut self, parent: EntityRef, name: &str) -> EntityRef {
        let row = self.allocate();
        let list_order = self.children_of(parent.row()).len() as i32 * super::LIST_ORDER_STEP;
        self.tables.diagrams.insert(
            row,
            DiagramRow {
                parent: parent.row(),
                name: name.to_string(),
                list_order,
            },
        );
        EntityRef::diagram(row)
    }

    /// Inserts a classifier and places it in `diagram`, bypassing the mutation log.
    pub fn insert_classifier(&mut self, diagram: EntityRef, name: &str) -> CreatedClassifier {
        let classifier = self.allocate();
        self.tables.classifiers.insert(
            classifier,
            ClassifierRow {
                name: name.to_string(),
                x_order: 0,
                y_order: 0,
                list_order: 0,
            },
        );
        let element = self.allocate();
        self.tables.elements.insert(
            element,
            ElementRow {
                diagram: diagram.row(),
                classifier,
            },
        );
        CreatedClassifier {
            classifier: EntityRef::classifier(classifier),
            element: EntityRef::diagram_element(element),
        }
    }

    /// Inserts a feature, bypassing the mutation log.
    pub fn insert_feature(&mut self, classifier: EntityRef, name: &str) -> EntityRef {
        let row = self.allocate();
        self.tables.features.insert(
            row,
            FeatureRow {
                classifier: classifier.row(),
                name: name.to_string(),
                list_order: 0,
                position: None,
            },
        );
        EntityRef::feature(row)
    }

    /// Deletes a diagram the way an external edit would.
    ///
    /// Like the real store, a diagram that still has children cannot be deleted.
    pub fn delete_diagram(&mut self, diagram: EntityRef) -> std::result::Result<(), StoreError> {
        self.check_open()?;
        if !self.tables.diagrams.contains_key(&diagram.row()) || !diagram.is_in(Table::Diagram) {
            return Err(StoreError::NotFound(diagram));
        }
        if !self.children_of(diagram.row()).is_empty() {
            return Err(StoreError::InvalidRequest(format!(
                "{} still has child diagrams",
                diagram
            )));
        }
        self.tables.diagrams.remove(&diagram.row());
        self.tables.elements.retain(|_, e| e.diagram != diagram.row());
        Ok(())
    }

    pub fn diagram(&self, diagram: EntityRef) -> Option<&DiagramRow> {
        self.tables.diagrams.get(&diagram.row())
    }

    pub fn classifier(&self, classifier: EntityRef) -> Option<&ClassifierRow> {
        self.tables.classifiers.get(&classifier.row())
    }

    pub fn feature(&self, feature: EntityRef) -> Option<&FeatureRow> {
        self.tables.features.get(&feature.row())
    }

    pub fn relationship(&self, relationship: EntityRef) -> Option<&RelationshipRow> {
        self.tables.relationships.get(&relationship.row())
    }

    fn allocate(&mut self) -> i64 {
        let row = self.next_row;
        self.next_row += 1;
        row
    }

    fn check_open(&self) -> std::result::Result<(), StoreError> {
        if self.open {
            Ok(())
        } else {
            Err(StoreError::NoDatabase)
        }
    }

    fn children_of(&self, parent_row: i64) -> Vec<(i32, i64)> {
        let mut children: Vec<(i32, i64)> = self
            .tables
            .diagrams
            .iter()
            .filter(|(_, d)| d.parent == parent_row)
            .map(|(row, d)| (d.list_order, *row))
            .collect();
        children.sort();
        children
    }

    fn require(&self, obj: EntityRef, table: Table) -> std::result::Result<(), StoreError> {
        let exists = obj.is_in(table)
            && match table {
                Table::Diagram => self.tables.diagrams.contains_key(&obj.row()),
                Table::Classifier => self.tables.classifiers.contains_key(&obj.row()),
                Table::DiagramElement => self.tables.elements.contains_key(&obj.row()),
                Table::Feature => self.tables.features.contains_key(&obj.row()),
                Table::Relationship => self.tables.relationships.contains_key(&obj.row()),
                Table::Void => false,
            };
        if exists {
            Ok(())
        } else {
            Err(StoreError::NotFound(obj))
        }
    }

    fn require_for_request(
        &self,
        obj: EntityRef,
        table: Table,
    ) -> std::result::Result<(), StoreError> {
        self.require(obj, table)
            .map_err(|_| StoreError::InvalidRequest(format!("{} is not a valid {}", obj, table)))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreReader for MemoryStore {
    fn is_open(&self) -> bool {
        self.open
    }

    fn diagram_ids_by_parent(
        &self,
        parent: EntityRef,
    ) -> std::result::Result<Vec<EntityRef>, StoreError> {
        self.check_open()?;
        Ok(self
            .children_of(parent.row())
            .into_iter()
            .map(|(_, row)| EntityRef::diagram(row))
            .collect())
    }

    fn diagram_parent(&self, diagram: EntityRef) -> std::result::Result<EntityRef, StoreError> {
        self.check_open()?;
        self.require(diagram, Table::Diagram)?;
        let row = &self.tables.diagrams[&diagram.row()];
        Ok(row_ref(Table::Diagram, row.parent))
    }

    fn is_descendant(
        &self,
        candidate: EntityRef,
        ancestor: EntityRef,
    ) -> std::result::Result<bool, StoreError> {
        self.check_open()?;
        self.require(candidate, Table::Diagram)?;
        self.require(ancestor, Table::Diagram)?;

        let mut current = self.tables.diagrams[&candidate.row()].parent;
        // a corrupt tree may contain a loop; never walk more rows than exist
        for _ in 0..self.tables.diagrams.len() {
            if current == ancestor.row() {
                return Ok(true);
            }
            match self.tables.diagrams.get(&current) {
                Some(row) => current = row.parent,
                None => return Ok(false),
            }
        }
        tracing::warn!("Diagram tree above {} contains a cycle", candidate);
        Ok(false)
    }
}

impl StoreWriter for MemoryStore {
    fn create_diagram(
        &mut self,
        new: NewDiagram,
        undo: UndoMode,
    ) -> std::result::Result<EntityRef, StoreError> {
        self.check_open()?;
        if new.parent.is_valid() {
            self.require_for_request(new.parent, Table::Diagram)?;
        }
        let row = self.allocate();
        self.tables.diagrams.insert(
            row,
            DiagramRow {
                parent: new.parent.row(),
                name: new.name,
                list_order: new.list_order,
            },
        );
        let diagram = EntityRef::diagram(row);
        self.mutations.push(Mutation::CreateDiagram {
            diagram,
            parent: new.parent,
            undo,
        });
        Ok(diagram)
    }

    fn create_classifier(
        &mut self,
        new: NewClassifier,
        undo: UndoMode,
    ) -> std::result::Result<CreatedClassifier, StoreError> {
        self.check_open()?;
        self.require_for_request(new.diagram, Table::Diagram)?;
        if new.parent_classifier.is_valid() {
            self.require_for_request(new.parent_classifier, Table::Classifier)?;
        }
        if self.tables.classifiers.values().any(|c| c.name == new.name) {
            return Err(StoreError::DuplicateName(new.name));
        }

        let classifier_row = self.allocate();
        self.tables.classifiers.insert(
            classifier_row,
            ClassifierRow {
                name: new.name,
                x_order: new.x_order,
                y_order: new.y_order,
                list_order: 0,
            },
        );
        let element_row = self.allocate();
        self.tables.elements.insert(
            element_row,
            ElementRow {
                diagram: new.diagram.row(),
                classifier: classifier_row,
            },
        );
        if new.parent_classifier.is_valid() {
            let containment = self.allocate();
            self.tables.relationships.insert(
                containment,
                RelationshipRow {
                    from_classifier: new.parent_classifier.row(),
                    from_feature: VOID_ROW,
                    to_classifier: classifier_row,
                    to_feature: VOID_ROW,
                    name: String::new(),
                    list_order: 0,
                },
            );
        }

        let created = CreatedClassifier {
            classifier: EntityRef::classifier(classifier_row),
            element: EntityRef::diagram_element(element_row),
        };
        self.mutations.push(Mutation::CreateClassifier {
            classifier: created.classifier,
            element: created.element,
            diagram: new.diagram,
            parent_classifier: new.parent_classifier,
            x_order: new.x_order,
            y_order: new.y_order,
            undo,
        });
        Ok(created)
    }

    fn create_feature(
        &mut self,
        new: NewFeature,
        undo: UndoMode,
    ) -> std::result::Result<EntityRef, StoreError> {
        self.check_open()?;
        self.require_for_request(new.classifier, Table::Classifier)?;
        let row = self.allocate();
        self.tables.features.insert(
            row,
            FeatureRow {
                classifier: new.classifier.row(),
                name: new.name,
                list_order: new.list_order,
                position: new.position,
            },
        );
        let feature = EntityRef::feature(row);
        self.mutations.push(Mutation::CreateFeature {
            feature,
            classifier: new.classifier,
            list_order: new.list_order,
            position: new.position,
            undo,
        });
        Ok(feature)
    }

    fn create_relationship(
        &mut self,
        new: NewRelationship,
        undo: UndoMode,
    ) -> std::result::Result<EntityRef, StoreError> {
        self.check_open()?;
        self.require_for_request(new.from_classifier, Table::Classifier)?;
        self.require_for_request(new.to_classifier, Table::Classifier)?;
        for feature in [new.from_feature, new.to_feature] {
            if feature.is_valid() {
                self.require_for_request(feature, Table::Feature)?;
            }
        }
        let row = self.allocate();
        self.tables.relationships.insert(
            row,
            RelationshipRow {
                from_classifier: new.from_classifier.row(),
                from_feature: new.from_feature.row(),
                to_classifier: new.to_classifier.row(),
                to_feature: new.to_feature.row(),
                name: new.name,
                list_order: new.list_order,
            },
        );
        let relationship = EntityRef::relationship(row);
        self.mutations.push(Mutation::CreateRelationship {
            relationship,
            from_classifier: new.from_classifier,
            to_classifier: new.to_classifier,
            list_order: new.list_order,
            undo,
        });
        Ok(relationship)
    }

    fn update_classifier_list_order(
        &mut self,
        classifier: EntityRef,
        list_order: i32,
        undo: UndoMode,
    ) -> std::result::Result<(), StoreError> {
        self.check_open()?;
        self.require(classifier, Table::Classifier)?;
        if let Some(row) = self.tables.classifiers.get_mut(&classifier.row()) {
            row.list_order = list_order;
        }
        self.mutations.push(Mutation::UpdateClassifierListOrder {
            classifier,
            list_order,
            undo,
        });
        Ok(())
    }

    fn update_classifier_x_y_order(
        &mut self,
        classifier: EntityRef,
        x_order: i32,
        y_order: i32,
        undo: UndoMode,
    ) -> std::result::Result<(), StoreError> {
        self.check_open()?;
        self.require(classifier, Table::Classifier)?;
        if let Some(row) = self.tables.classifiers.get_mut(&classifier.row()) {
            row.x_order = x_order;
            row.y_order = y_order;
        }
        self.mutations.push(Mutation::UpdateClassifierXYOrder {
            classifier,
            x_order,
            y_order,
            undo,
        });
        Ok(())
    }

    fn update_feature_list_order(
        &mut self,
        feature: EntityRef,
        list_order: i32,
        undo: UndoMode,
    ) -> std::result::Result<(), StoreError> {
        self.check_open()?;
        self.require(feature, Table::Feature)?;
        if let Some(row) = self.tables.features.get_mut(&feature.row()) {
            row.list_order = list_order;
        }
        self.mutations.push(Mutation::UpdateFeatureListOrder {
            feature,
            list_order,
            undo,
        });
        Ok(())
    }

    fn update_relationship_list_order(
        &mut self,
        relationship: EntityRef,
        list_order: i32,
        undo: UndoMode,
    ) -> std::result::Result<(), StoreError> {
        self.check_open()?;
        self.require(relationship, Table::Relationship)?;
        if let Some(row) = self.tables.relationships.get_mut(&relationship.row()) {
            row.list_order = list_order;
        }
        self.mutations.push(Mutation::UpdateRelationshipListOrder {
            relationship,
            list_order,
            undo,
        });
        Ok(())
    }

    fn update_diagram_list_order(
        &mut self,
        diagram: EntityRef,
        list_order: i32,
        undo: UndoMode,
    ) -> std::result::Result<(), StoreError> {
        self.check_open()?;
        self.require(diagram, Table::Diagram)?;
        if let Some(row) = self.tables.diagrams.get_mut(&diagram.row()) {
            row.list_order = list_order;
        }
        self.mutations.push(Mutation::UpdateDiagramListOrder {
            diagram,
            list_order,
            undo,
        });
        Ok(())
    }

    fn update_diagram_parent(
        &mut self,
        diagram: EntityRef,
        new_parent: EntityRef,
        undo: UndoMode,
    ) -> std::result::Result<(), StoreError> {
        self.check_open()?;
        self.require(diagram, Table::Diagram)?;
        if new_parent.is_valid() {
            self.require_for_request(new_parent, Table::Diagram)?;
            if new_parent == diagram || self.is_descendant(new_parent, diagram)? {
                return Err(StoreError::InvalidRequest(format!(
                    "{} cannot become a child of its own subtree",
                    diagram
                )));
            }
        }
        if let Some(row) = self.tables.diagrams.get_mut(&diagram.row()) {
            row.parent = new_parent.row();
        }
        self.mutations.push(Mutation::UpdateDiagramParent {
            diagram,
            parent: new_parent,
            undo,
        });
        Ok(())
    }
}
