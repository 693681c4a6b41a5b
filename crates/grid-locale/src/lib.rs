#![forbid(unsafe_code)]

//! Locale text and cell formatters for a data-grid widget.
//!
//! Provides a key-based resource table whose entries are either literal
//! strings or positional templates, the Brazilian Portuguese table the grid
//! reads its UI chrome from, and the small formatting helpers it calls back
//! into (title-casing and pt-BR number formatting).
//!
//! ```
//! use grid_locale::{pt_br, to_title_case};
//!
//! let table = pt_br();
//! assert_eq!(table.literal("copy"), Some("Copiar"));
//! assert_eq!(
//!     table.format("ariaAdvancedFilterBuilderItem", &["Column A", "2"]).unwrap(),
//!     "Column A. Nível 2. Pressione ENTER para editar"
//! );
//! assert_eq!(to_title_case("row_group_panel"), "Row Group Panel");
//! ```

pub mod catalog;
pub mod format;
pub mod pt_br;
pub mod template;

pub use catalog::{LocaleError, LocaleStrings, MessageValue};
pub use format::{
    FormatError, FormattedValue, NumberFormatOptions, ValueFormatterParams, format_decimal,
    format_number, format_number_with, to_title_case,
};
pub use pt_br::{PT_BR, build_pt_br, pt_br};
pub use template::Template;
