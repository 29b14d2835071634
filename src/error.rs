//! Rich diagnostic error types for the AAC board.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text. The container reports precise lookup
//! failures; the board translates them into domain errors at its public boundary.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the AAC board.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum AacError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Container(#[from] ContainerError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Container errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ContainerError {
    #[error("null key: an associative array cannot store an absent key")]
    #[diagnostic(
        code(aac::assoc::null_key),
        help("Provide a concrete key when calling `set`.")
    )]
    NullKey,

    #[error("key not found: {key}")]
    #[diagnostic(
        code(aac::assoc::key_not_found),
        help("Check membership with `has_key` before calling `get`.")
    )]
    KeyNotFound { key: String },
}

// ---------------------------------------------------------------------------
// Board errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum BoardError {
    #[error("no such image \"{image_loc}\" in category \"{category}\"")]
    #[diagnostic(
        code(aac::board::no_such_image),
        help(
            "The pictogram is not shown in the current category. \
             Call `reset()` to return home, or pick one of `get_image_locs()`."
        )
    )]
    NoSuchImage { image_loc: String, category: String },

    #[error("home pictogram points to unknown category \"{name}\"")]
    #[diagnostic(
        code(aac::board::invalid_category_reference),
        help(
            "Every home pictogram must name a registered category. \
             The mapping data is inconsistent; reload it from a valid file."
        )
    )]
    InvalidCategoryReference { name: String },

    #[error("home pictogram \"{image_loc}\" has an empty category name")]
    #[diagnostic(
        code(aac::board::empty_category_name),
        help("The empty name is reserved for the home screen. Give the category a name.")
    )]
    EmptyCategoryName { image_loc: String },

    #[error("category \"{name}\" is already registered")]
    #[diagnostic(
        code(aac::board::duplicate_category),
        help(
            "Home pictogram texts must be unique. Rename the category, or set \
             `duplicate_categories = \"overwrite\"` to replace the earlier one."
        )
    )]
    DuplicateCategory { name: String },
}

// ---------------------------------------------------------------------------
// Mapping file errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum MappingError {
    #[error("malformed mapping at line {line}: {message}")]
    #[diagnostic(
        code(aac::mapping::malformed),
        help(
            "Category lines look like `<image> <name>`; item lines look like \
             `><image> <text>` and must follow a category line."
        )
    )]
    Malformed { line: usize, message: String },

    #[error("cannot write \"{image_loc}\" as a mapping line: {message}")]
    #[diagnostic(
        code(aac::mapping::unencodable),
        help(
            "Image locations must be non-empty and free of spaces and line breaks, \
             and a category's image must not start with `>`. Names and texts must \
             not contain line breaks. Rename the pictogram and write again."
        )
    )]
    Unencodable { image_loc: String, message: String },

    #[error("I/O error on mapping file: {path}")]
    #[diagnostic(
        code(aac::mapping::io),
        help("Check that the file exists and that you have read/write permissions.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read board config: {path}")]
    #[diagnostic(
        code(aac::config::read),
        help("Ensure the config file exists and is valid TOML.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse board config {path}: {message}")]
    #[diagnostic(
        code(aac::config::parse),
        help("Check the TOML syntax and the `duplicate_categories` value (overwrite | reject).")
    )]
    Parse { path: String, message: String },

    #[error("failed to write board config: {path}")]
    #[diagnostic(
        code(aac::config::write),
        help("Ensure you have write permissions to the config directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for functions returning board results.
pub type AacResult<T> = std::result::Result<T, AacError>;

/// Result alias for container operations.
pub type ContainerResult<T> = std::result::Result<T, ContainerError>;

/// Result alias for board navigation.
pub type BoardResult<T> = std::result::Result<T, BoardError>;

/// Result alias for mapping file operations.
pub type MappingResult<T> = std::result::Result<T, MappingError>;
