//! Example process descriptions for the help/examples panel.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::api::{Example, GenerationService};

/// Built-in examples used when the examples endpoint is unreachable.
#[must_use]
pub fn fallback_examples() -> Vec<Example> {
    vec![
        Example::new(
            "User Login Process",
            "User enters credentials, system validates, if valid show dashboard, otherwise show error",
        ),
        Example::new(
            "Order Processing",
            "Customer places order, check inventory, process payment, ship if successful",
        ),
    ]
}

/// Examples currently offered to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleCatalog {
    examples: Vec<Example>,
}

impl ExampleCatalog {
    /// Fetch the list from the service.
    ///
    /// A declined response leaves the catalog empty; only transport or decode
    /// failures fall back to the built-in pair.
    pub async fn load<S: GenerationService>(service: &S) -> Self {
        let examples = match service.examples().await {
            Ok(resp) if resp.success => resp.examples,
            Ok(_) => {
                tracing::warn!("examples endpoint declined; showing none");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load examples; using built-in list");
                fallback_examples()
            }
        };
        Self { examples }
    }

    #[must_use]
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Description to place into the text input for the chosen example.
    #[must_use]
    pub fn select(&self, index: usize) -> Option<&str> {
        self.examples.get(index).map(|e| e.description.as_str())
    }
}
