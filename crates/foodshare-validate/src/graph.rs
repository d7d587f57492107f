//! Dependency graph between form fields.
//!
//! An edge `dependency -> dependent` means the dependent's verdict needs the
//! dependency's verdict (comuna needs region, end date needs start date).
//! Evaluating fields in topological order computes each dependency once
//! before anything that consumes it.

use std::collections::{BTreeMap, BTreeSet};

use foodshare_model::FieldName;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("dependency cycle among fields: {}", format_fields(.0))]
    Cycle(Vec<FieldName>),
    #[error("field {0} cannot depend on itself")]
    SelfDependency(FieldName),
}

fn format_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(FieldName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Acyclic dependency graph over [`FieldName`].
#[derive(Debug, Clone)]
pub struct FieldGraph {
    dependents: BTreeMap<FieldName, BTreeSet<FieldName>>,
    dependencies: BTreeMap<FieldName, BTreeSet<FieldName>>,
    order: Vec<FieldName>,
}

impl FieldGraph {
    /// Graph of the registration form, built from [`FieldName::depends_on`].
    pub fn form() -> Self {
        let edges = FieldName::ALL
            .into_iter()
            .filter_map(|field| field.depends_on().map(|dependency| (dependency, field)));
        Self::from_edges(edges).expect("built-in field graph is acyclic")
    }

    /// Build a graph from `(dependency, dependent)` edges.
    ///
    /// Fails when the edges contain a cycle.
    pub fn from_edges(
        edges: impl IntoIterator<Item = (FieldName, FieldName)>,
    ) -> Result<Self, GraphError> {
        let mut dependents: BTreeMap<FieldName, BTreeSet<FieldName>> = BTreeMap::new();
        let mut dependencies: BTreeMap<FieldName, BTreeSet<FieldName>> = BTreeMap::new();
        for (dependency, dependent) in edges {
            if dependency == dependent {
                return Err(GraphError::SelfDependency(dependent));
            }
            dependents.entry(dependency).or_default().insert(dependent);
            dependencies.entry(dependent).or_default().insert(dependency);
        }
        let order = topological_order(&dependents, &dependencies)?;
        Ok(Self {
            dependents,
            dependencies,
            order,
        })
    }

    /// Every field, dependencies before dependents; ties keep form order.
    pub fn order(&self) -> &[FieldName] {
        &self.order
    }

    /// Direct dependencies of a field.
    pub fn dependencies_of(&self, field: FieldName) -> impl Iterator<Item = FieldName> + '_ {
        self.dependencies.get(&field).into_iter().flatten().copied()
    }

    /// Direct dependents of a field.
    pub fn dependents_of(&self, field: FieldName) -> impl Iterator<Item = FieldName> + '_ {
        self.dependents.get(&field).into_iter().flatten().copied()
    }

    /// Fields to re-validate after `field` changed: its ancestors, the field
    /// itself and its descendants, in topological order.
    pub fn revalidation_set(&self, field: FieldName) -> Vec<FieldName> {
        let mut touched = BTreeSet::from([field]);
        collect(field, &self.dependencies, &mut touched);
        collect(field, &self.dependents, &mut touched);
        self.restrict(&touched)
    }

    /// Union of the revalidation sets of several fields, in topological order.
    pub fn revalidation_set_of(
        &self,
        fields: impl IntoIterator<Item = FieldName>,
    ) -> Vec<FieldName> {
        let touched: BTreeSet<FieldName> = fields
            .into_iter()
            .flat_map(|field| self.revalidation_set(field))
            .collect();
        self.restrict(&touched)
    }

    /// The given fields plus everything they transitively depend on, in
    /// topological order.
    pub fn with_dependencies(&self, fields: impl IntoIterator<Item = FieldName>) -> Vec<FieldName> {
        let mut needed = BTreeSet::new();
        for field in fields {
            needed.insert(field);
            collect(field, &self.dependencies, &mut needed);
        }
        self.restrict(&needed)
    }

    fn restrict(&self, fields: &BTreeSet<FieldName>) -> Vec<FieldName> {
        self.order
            .iter()
            .copied()
            .filter(|field| fields.contains(field))
            .collect()
    }
}

impl Default for FieldGraph {
    fn default() -> Self {
        Self::form()
    }
}

fn collect(
    field: FieldName,
    edges: &BTreeMap<FieldName, BTreeSet<FieldName>>,
    seen: &mut BTreeSet<FieldName>,
) {
    for next in edges.get(&field).into_iter().flatten() {
        if seen.insert(*next) {
            collect(*next, edges, seen);
        }
    }
}

/// Kahn's algorithm; the ready set is ordered so ties resolve in form order.
fn topological_order(
    dependents: &BTreeMap<FieldName, BTreeSet<FieldName>>,
    dependencies: &BTreeMap<FieldName, BTreeSet<FieldName>>,
) -> Result<Vec<FieldName>, GraphError> {
    let mut remaining: BTreeMap<FieldName, usize> = FieldName::ALL
        .into_iter()
        .map(|field| (field, dependencies.get(&field).map_or(0, BTreeSet::len)))
        .collect();
    let mut ready: BTreeSet<FieldName> = remaining
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(field, _)| *field)
        .collect();

    let mut order = Vec::with_capacity(FieldName::ALL.len());
    while let Some(field) = ready.pop_first() {
        order.push(field);
        remaining.remove(&field);
        for dependent in dependents.get(&field).into_iter().flatten() {
            if let Some(count) = remaining.get_mut(dependent) {
                *count -= 1;
                if *count == 0 {
                    ready.insert(*dependent);
                }
            }
        }
    }

    if remaining.is_empty() {
        Ok(order)
    } else {
        Err(GraphError::Cycle(remaining.into_keys().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[FieldName], field: FieldName) -> usize {
        order.iter().position(|f| *f == field).unwrap()
    }

    #[test]
    fn form_order_puts_dependencies_first() {
        let graph = FieldGraph::form();
        let order = graph.order();
        assert_eq!(order.len(), FieldName::ALL.len());
        assert!(position(order, FieldName::Region) < position(order, FieldName::Comuna));
        assert!(position(order, FieldName::StartDate) < position(order, FieldName::EndDate));
        assert_eq!(order, FieldName::ALL);
    }

    #[test]
    fn form_graph_keeps_the_cascade_edges() {
        let graph = FieldGraph::form();
        assert_eq!(
            graph.dependents_of(FieldName::Region).collect::<Vec<_>>(),
            [FieldName::Comuna]
        );
        assert_eq!(
            graph.dependents_of(FieldName::StartDate).collect::<Vec<_>>(),
            [FieldName::EndDate]
        );
    }

    #[test]
    fn revalidation_sets() {
        let graph = FieldGraph::form();
        assert_eq!(
            graph.revalidation_set(FieldName::Region),
            [FieldName::Region, FieldName::Comuna]
        );
        assert_eq!(
            graph.revalidation_set(FieldName::Comuna),
            [FieldName::Region, FieldName::Comuna]
        );
        assert_eq!(
            graph.revalidation_set(FieldName::EndDate),
            [FieldName::StartDate, FieldName::EndDate]
        );
        assert_eq!(graph.revalidation_set(FieldName::Email), [FieldName::Email]);
    }

    #[test]
    fn union_of_sets_keeps_topological_order() {
        let graph = FieldGraph::form();
        assert_eq!(
            graph.revalidation_set_of([FieldName::EndDate, FieldName::Comuna]),
            [
                FieldName::Region,
                FieldName::Comuna,
                FieldName::StartDate,
                FieldName::EndDate
            ]
        );
    }

    #[test]
    fn dependencies_are_pulled_in() {
        let graph = FieldGraph::form();
        assert_eq!(
            graph.with_dependencies([FieldName::EndDate]),
            [FieldName::StartDate, FieldName::EndDate]
        );
        assert_eq!(graph.with_dependencies([FieldName::Region]), [FieldName::Region]);
    }

    #[test]
    fn reversed_edge_reorders() {
        let graph = FieldGraph::from_edges([(FieldName::Email, FieldName::Region)]).unwrap();
        let order = graph.order();
        assert!(position(order, FieldName::Email) < position(order, FieldName::Region));
        assert_eq!(
            graph.dependents_of(FieldName::Email).collect::<Vec<_>>(),
            [FieldName::Region]
        );
    }

    #[test]
    fn cycles_are_rejected() {
        let err = FieldGraph::from_edges([
            (FieldName::Region, FieldName::Comuna),
            (FieldName::Comuna, FieldName::Region),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            GraphError::Cycle(vec![FieldName::Region, FieldName::Comuna])
        );
        assert!(matches!(
            FieldGraph::from_edges([(FieldName::Email, FieldName::Email)]),
            Err(GraphError::SelfDependency(FieldName::Email))
        ));
    }
}
