use super::manager::BrowserError;
use std::fmt;

/// Predicate a wait loop can poll for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitCondition {
    /// Element is present in the DOM.
    Present,
    /// Element is present and rendered (visible enough to click).
    Clickable,
    /// Element is present and the named attribute is non-empty.
    AttributeNonEmpty(&'static str),
}

impl fmt::Display for WaitCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitCondition::Present => write!(f, "present"),
            WaitCondition::Clickable => write!(f, "clickable"),
            WaitCondition::AttributeNonEmpty(attr) => {
                write!(f, "attribute '{}' non-empty", attr)
            }
        }
    }
}

/// Capability interface over an automated browser page.
///
/// The extraction pipeline is written entirely against this trait, so the
/// concrete automation backend ([`ChromeTab`](super::tab::ChromeTab)) is
/// swappable and tests can run the pipeline over a scripted fake.
///
/// Extraction methods are pure with respect to the page snapshot: none of
/// them trigger navigation.
pub trait Page {
    /// Load a URL and block until the initial navigation settles.
    fn navigate(&mut self, url: &str) -> Result<(), BrowserError>;

    /// Single non-blocking probe of a wait condition. The polling loop
    /// lives in [`wait_for`](super::wait::wait_for), not here.
    fn probe(&mut self, locator: &str, condition: WaitCondition) -> Result<bool, BrowserError>;

    /// Rendered text of the first element matching `locator`.
    fn text_of(&mut self, locator: &str) -> Result<String, BrowserError>;

    /// Rendered text of every element matching `locator`, in document order.
    fn texts_of(&mut self, locator: &str) -> Result<Vec<String>, BrowserError>;

    /// Attribute value of the first element matching `locator`.
    fn attribute_of(&mut self, locator: &str, attribute: &str) -> Result<String, BrowserError>;

    /// Inner HTML of the first element matching `locator`.
    fn inner_html_of(&mut self, locator: &str) -> Result<String, BrowserError>;

    /// Click the first element matching `locator`.
    fn click(&mut self, locator: &str) -> Result<(), BrowserError>;

    /// Current scrollable document height.
    fn scroll_height(&mut self) -> Result<u64, BrowserError>;

    /// Scroll to the bottom of the document.
    fn scroll_to_bottom(&mut self) -> Result<(), BrowserError>;

    /// Full page HTML.
    fn page_source(&mut self) -> Result<String, BrowserError>;
}
