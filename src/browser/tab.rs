use super::manager::BrowserError;
use super::page::{Page, WaitCondition};
use headless_chrome::Tab;
use serde_json::Value;
use std::sync::Arc;

/// Concrete [`Page`] binding over a headless Chrome tab.
///
/// All DOM access goes through evaluated JavaScript against the live page,
/// keeping the binding a thin adapter behind the capability interface.
pub struct ChromeTab {
    tab: Arc<Tab>,
}

impl ChromeTab {
    pub(crate) fn new(tab: Arc<Tab>) -> Self {
        Self { tab }
    }

    fn quote(locator: &str) -> String {
        locator.replace('\'', "\\'")
    }

    fn evaluate(&self, script: &str) -> Result<Option<Value>, BrowserError> {
        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| BrowserError::Script(e.to_string()))?;
        Ok(result.value)
    }

    /// Evaluate a script that yields a string, or null when the element is
    /// missing.
    fn evaluate_string(&self, script: &str, locator: &str) -> Result<String, BrowserError> {
        match self.evaluate(script)? {
            Some(Value::String(s)) => Ok(s),
            Some(Value::Null) | None => Err(BrowserError::ElementNotFound(locator.to_string())),
            Some(other) => Err(BrowserError::Script(format!(
                "expected a string for {}, got {}",
                locator, other
            ))),
        }
    }
}

impl Page for ChromeTab {
    fn navigate(&mut self, url: &str) -> Result<(), BrowserError> {
        self.tab.navigate_to(url).map_err(|e| BrowserError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| BrowserError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }

    fn probe(&mut self, locator: &str, condition: WaitCondition) -> Result<bool, BrowserError> {
        let sel = Self::quote(locator);
        let script = match condition {
            WaitCondition::Present => {
                format!("document.querySelector('{}') !== null", sel)
            }
            WaitCondition::Clickable => format!(
                "(() => {{ const el = document.querySelector('{}'); \
                 return el !== null && el.offsetParent !== null; }})()",
                sel
            ),
            WaitCondition::AttributeNonEmpty(attr) => format!(
                "(() => {{ const el = document.querySelector('{}'); \
                 return el !== null && !!el.getAttribute('{}'); }})()",
                sel, attr
            ),
        };

        Ok(self
            .evaluate(&script)?
            .and_then(|v| v.as_bool())
            .unwrap_or(false))
    }

    fn text_of(&mut self, locator: &str) -> Result<String, BrowserError> {
        let script = format!(
            "(() => {{ const el = document.querySelector('{}'); \
             return el ? el.innerText : null; }})()",
            Self::quote(locator)
        );
        Ok(self.evaluate_string(&script, locator)?.trim().to_string())
    }

    fn texts_of(&mut self, locator: &str) -> Result<Vec<String>, BrowserError> {
        let script = format!(
            "JSON.stringify(Array.from(document.querySelectorAll('{}')).map(el => el.innerText))",
            Self::quote(locator)
        );
        let json = self.evaluate_string(&script, locator)?;
        let texts: Vec<String> = serde_json::from_str(&json)
            .map_err(|e| BrowserError::Script(format!("bad text list for {}: {}", locator, e)))?;
        Ok(texts.into_iter().map(|t| t.trim().to_string()).collect())
    }

    fn attribute_of(&mut self, locator: &str, attribute: &str) -> Result<String, BrowserError> {
        let script = format!(
            "(() => {{ const el = document.querySelector('{}'); \
             return el ? el.getAttribute('{}') : null; }})()",
            Self::quote(locator),
            attribute
        );
        self.evaluate_string(&script, locator)
    }

    fn inner_html_of(&mut self, locator: &str) -> Result<String, BrowserError> {
        let script = format!(
            "(() => {{ const el = document.querySelector('{}'); \
             return el ? el.innerHTML : null; }})()",
            Self::quote(locator)
        );
        self.evaluate_string(&script, locator)
    }

    fn click(&mut self, locator: &str) -> Result<(), BrowserError> {
        let script = format!(
            "(() => {{ const el = document.querySelector('{}'); \
             if (el === null) return false; el.click(); return true; }})()",
            Self::quote(locator)
        );
        let clicked = self
            .evaluate(&script)?
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if clicked {
            Ok(())
        } else {
            Err(BrowserError::ElementNotFound(locator.to_string()))
        }
    }

    fn scroll_height(&mut self) -> Result<u64, BrowserError> {
        self.evaluate("document.documentElement.scrollHeight")?
            .and_then(|v| v.as_f64())
            .map(|h| h as u64)
            .ok_or_else(|| BrowserError::Script("scrollHeight returned no number".to_string()))
    }

    fn scroll_to_bottom(&mut self) -> Result<(), BrowserError> {
        self.evaluate("window.scrollTo(0, document.documentElement.scrollHeight);")?;
        Ok(())
    }

    fn page_source(&mut self) -> Result<String, BrowserError> {
        self.tab
            .get_content()
            .map_err(|e| BrowserError::Unexpected(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_escapes_single_quotes() {
        assert_eq!(ChromeTab::quote("a[title='x']"), "a[title=\\'x\\']");
        assert_eq!(ChromeTab::quote("#plain"), "#plain");
    }
}
