use once_cell::sync::Lazy;
use regex::Regex;

use super::common::extract_with;
use super::language_trait::CommentSyntax;

static POWERSHELL_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#.*|<#[\s\S]*?#>").unwrap());

/// Comment extraction for PowerShell: `#` lines and `<# #>` blocks
pub struct PowerShellComments;

impl Default for PowerShellComments {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerShellComments {
    pub fn new() -> Self {
        PowerShellComments
    }
}

impl CommentSyntax for PowerShellComments {
    fn extract_comments(&self, source: &str) -> Vec<String> {
        extract_with(&POWERSHELL_COMMENT, source)
    }
}
