use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Which atoms end up in the export.
pub struct DisplayOptions {
    /// Whether hydrogen atoms (and bonds to them) are exported.
    #[schemars(title = "Show Hydrogens")]
    pub show_hydrogens: bool,
}
