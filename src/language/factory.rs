use crate::language::assembly::AssemblyComments;
use crate::language::bash::BashComments;
use crate::language::batch::BatchComments;
use crate::language::c_like::CFamilyComments;
use crate::language::clojure::ClojureComments;
use crate::language::css::CssComments;
use crate::language::elixir::ElixirComments;
use crate::language::fortran::FortranComments;
use crate::language::haskell::HaskellComments;
use crate::language::html::HtmlComments;
use crate::language::julia::JuliaComments;
use crate::language::kinds::Language;
use crate::language::language_trait::CommentSyntax;
use crate::language::lua::LuaComments;
use crate::language::matlab::MatlabComments;
use crate::language::pascal::PascalComments;
use crate::language::powershell::PowerShellComments;
use crate::language::python::PythonComments;
use crate::language::ruby::RubyComments;
use crate::language::sql::SqlComments;
use crate::language::visual_basic::VisualBasicComments;

/// Factory function to get the comment syntax for a language.
/// Returns `None` for `Unknown`, which has no comment markers to match.
pub fn comment_syntax(language: Language) -> Option<Box<dyn CommentSyntax>> {
    match language {
        Language::Go
        | Language::C
        | Language::Cpp
        | Language::CSharp
        | Language::Rust
        | Language::JavaScript
        | Language::TypeScript
        | Language::Java
        | Language::Kotlin
        | Language::Swift
        | Language::Php
        | Language::Dart
        | Language::Scala
        | Language::ObjectiveC
        | Language::Zig => Some(Box::new(CFamilyComments::new())),
        Language::Python | Language::R => Some(Box::new(PythonComments::new())),
        Language::Ruby | Language::Perl => Some(Box::new(RubyComments::new())),
        Language::Pascal | Language::FSharp => Some(Box::new(PascalComments::new())),
        Language::Elixir => Some(Box::new(ElixirComments::new())),
        Language::Html => Some(Box::new(HtmlComments::new())),
        Language::Css => Some(Box::new(CssComments::new())),
        Language::Sql => Some(Box::new(SqlComments::new())),
        Language::Lua => Some(Box::new(LuaComments::new())),
        Language::Haskell => Some(Box::new(HaskellComments::new())),
        Language::Assembly => Some(Box::new(AssemblyComments::new())),
        Language::Bash => Some(Box::new(BashComments::new())),
        Language::Batch => Some(Box::new(BatchComments::new())),
        Language::PowerShell => Some(Box::new(PowerShellComments::new())),
        Language::Matlab => Some(Box::new(MatlabComments::new())),
        Language::VisualBasic => Some(Box::new(VisualBasicComments::new())),
        Language::Clojure => Some(Box::new(ClojureComments::new())),
        Language::Julia => Some(Box::new(JuliaComments::new())),
        Language::Fortran => Some(Box::new(FortranComments::new())),
        Language::Unknown => None,
    }
}
