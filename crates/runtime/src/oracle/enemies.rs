//! [`frontier_core::EnemyOracle`] over the loaded enemy templates.
use frontier_core::{EnemyOracle, EnemyTemplate};

/// Templates in catalog order.
#[derive(Default)]
pub struct EnemyOracleImpl {
    templates: Vec<EnemyTemplate>,
}

impl EnemyOracleImpl {
    pub fn new(templates: Vec<EnemyTemplate>) -> Self {
        Self { templates }
    }
}

impl EnemyOracle for EnemyOracleImpl {
    fn template(&self, template_id: &str) -> Option<&EnemyTemplate> {
        self.templates
            .iter()
            .find(|template| template.id == template_id)
    }

    fn template_ids(&self) -> Vec<&str> {
        self.templates
            .iter()
            .map(|template| template.id.as_str())
            .collect()
    }
}
