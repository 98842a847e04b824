//! Report rendering - compact and verbose views of a resolver run

use crate::impact::ImpactMap;

/// The assembled result of one resolver run. Pure data; the renderers
/// below do formatting only, no decision logic.
#[derive(Debug)]
pub struct ImpactReport {
    /// Impacted deployable components, sorted.
    pub components: Vec<String>,

    /// Changed module -> transitive dependents, in change order.
    pub impact: ImpactMap,

    /// Modules declared by the changed files, in change order.
    pub changed_modules: Vec<String>,
}

impl ImpactReport {
    /// True when no component is impacted.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// One component per line; empty when nothing is impacted.
    pub fn render_compact(&self) -> String {
        self.components.join("\n")
    }

    /// Components annotated with the changed modules that pulled each one
    /// in, followed by the raw changed-module list.
    pub fn render_verbose(&self) -> String {
        let mut out = String::new();

        out.push_str("Impacted components:\n");
        if self.components.is_empty() {
            out.push_str("  (none)\n");
        }
        for component in &self.components {
            let mut causes: Vec<&str> = self
                .impact
                .iter()
                .filter(|(_, dependents)| dependents.contains(component))
                .map(|(changed, _)| changed.as_str())
                .collect();
            causes.sort_unstable();
            out.push_str(&format!("  {} <- {}\n", component, causes.join(", ")));
        }

        out.push_str("\nChanged modules:\n");
        if self.changed_modules.is_empty() {
            out.push_str("  (none)\n");
        }
        for changed in &self.changed_modules {
            out.push_str(&format!("  {}\n", changed));
        }

        out
    }
}
