use headless_chrome::{Element, Tab};
use std::fmt;

/// How a locator addresses the results table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    /// Any element with this tag name
    TagName(&'static str),
    /// Any element carrying this class
    ClassName(&'static str),
    /// A CSS selector
    Css(&'static str),
    /// An XPath expression
    XPath(&'static str),
}

/// Strategies tried in order when looking for the results table
pub const TABLE_LOCATORS: &[Locator] = &[
    Locator::TagName("table"),
    Locator::ClassName("table"),
    Locator::Css("table.table"),
    Locator::XPath("//table"),
];

impl Locator {
    /// CSS form of the locator, or `None` for XPath
    pub fn css(&self) -> Option<String> {
        match *self {
            Locator::TagName(tag) => Some(tag.to_string()),
            Locator::ClassName(class) => Some(format!(".{}", class)),
            Locator::Css(css) => Some(css.to_string()),
            Locator::XPath(_) => None,
        }
    }

    /// The raw selector or expression
    pub fn expression(&self) -> &'static str {
        match *self {
            Locator::TagName(s) | Locator::ClassName(s) | Locator::Css(s) | Locator::XPath(s) => s,
        }
    }

    /// Look the element up once, without waiting
    pub fn find<'a>(&self, tab: &'a Tab) -> Result<Element<'a>, String> {
        let found = match self.css() {
            Some(css) => tab.find_element(&css),
            None => tab.find_element_by_xpath(self.expression()),
        };
        found.map_err(|e| e.to_string())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::TagName(tag) => write!(f, "tag name '{}'", tag),
            Locator::ClassName(class) => write!(f, "class name '{}'", class),
            Locator::Css(css) => write!(f, "CSS '{}'", css),
            Locator::XPath(xpath) => write!(f, "XPath '{}'", xpath),
        }
    }
}

/// Try each locator in order and return the first element found along with its locator
pub fn find_first<'a>(tab: &'a Tab, locators: &[Locator]) -> Option<(Locator, Element<'a>)> {
    locators.iter().find_map(|locator| match locator.find(tab) {
        Ok(element) => Some((*locator, element)),
        Err(e) => {
            log::debug!("No match for {}: {}", locator, e);
            None
        }
    })
}
