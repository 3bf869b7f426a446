use thiserror::Error;

/// Errors raised when an entity is constructed directly from text that does
/// not match its grammar.
///
/// Document parsing never produces these: unclassifiable input degrades to
/// plain text there. Only out-of-context construction via the `parse`
/// associated functions on the model types can fail.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Text does not match the ingredient grammar
    #[error("error parsing ingredient: '{0}'")]
    Ingredient(String),

    /// Text does not match the cookware grammar
    #[error("error parsing cookware: '{0}'")]
    Cookware(String),

    /// Text does not match the timer grammar
    #[error("error parsing timer: '{0}'")]
    Timer(String),

    /// Text does not match the metadata grammar
    #[error("error parsing metadata: '{0}'")]
    Metadata(String),
}
