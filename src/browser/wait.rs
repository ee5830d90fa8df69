use super::manager::BrowserError;
use super::page::{Page, WaitCondition};
use std::time::{Duration, Instant};

/// Poll `condition` on `locator` until it holds or `timeout` elapses.
///
/// Probes once immediately, so a zero timeout still gets one look at the
/// page before failing. A timeout never yields a silent null element; it
/// is always a [`BrowserError::WaitTimeout`] tagged with the locator and
/// condition.
pub fn wait_for<P: Page>(
    page: &mut P,
    locator: &str,
    condition: WaitCondition,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<(), BrowserError> {
    let start = Instant::now();

    loop {
        if page.probe(locator, condition)? {
            return Ok(());
        }

        if start.elapsed() >= timeout {
            return Err(BrowserError::WaitTimeout {
                locator: locator.to_string(),
                condition,
                timeout,
            });
        }

        std::thread::sleep(poll_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Page whose probe succeeds only from the nth call on.
    struct CountingPage {
        probes: u32,
        succeed_after: Option<u32>,
    }

    impl CountingPage {
        fn new(succeed_after: Option<u32>) -> Self {
            Self {
                probes: 0,
                succeed_after,
            }
        }
    }

    impl Page for CountingPage {
        fn navigate(&mut self, _url: &str) -> Result<(), BrowserError> {
            Ok(())
        }

        fn probe(&mut self, _locator: &str, _condition: WaitCondition) -> Result<bool, BrowserError> {
            self.probes += 1;
            Ok(matches!(self.succeed_after, Some(n) if self.probes > n))
        }

        fn text_of(&mut self, locator: &str) -> Result<String, BrowserError> {
            Err(BrowserError::ElementNotFound(locator.to_string()))
        }

        fn texts_of(&mut self, _locator: &str) -> Result<Vec<String>, BrowserError> {
            Ok(Vec::new())
        }

        fn attribute_of(&mut self, locator: &str, _attribute: &str) -> Result<String, BrowserError> {
            Err(BrowserError::ElementNotFound(locator.to_string()))
        }

        fn inner_html_of(&mut self, locator: &str) -> Result<String, BrowserError> {
            Err(BrowserError::ElementNotFound(locator.to_string()))
        }

        fn click(&mut self, _locator: &str) -> Result<(), BrowserError> {
            Ok(())
        }

        fn scroll_height(&mut self) -> Result<u64, BrowserError> {
            Ok(0)
        }

        fn scroll_to_bottom(&mut self) -> Result<(), BrowserError> {
            Ok(())
        }

        fn page_source(&mut self) -> Result<String, BrowserError> {
            Ok(String::new())
        }
    }

    #[test]
    fn zero_timeout_on_missing_element_fails_promptly() {
        let mut page = CountingPage::new(None);
        let started = Instant::now();
        let result = wait_for(
            &mut page,
            "#absent",
            WaitCondition::Present,
            Duration::ZERO,
            Duration::from_millis(100),
        );
        assert!(started.elapsed() < Duration::from_millis(100));
        assert_eq!(page.probes, 1);
        match result {
            Err(BrowserError::WaitTimeout {
                locator, condition, ..
            }) => {
                assert_eq!(locator, "#absent");
                assert_eq!(condition, WaitCondition::Present);
            }
            other => panic!("expected WaitTimeout, got {:?}", other),
        }
    }

    #[test]
    fn returns_as_soon_as_condition_holds() {
        let mut page = CountingPage::new(Some(2));
        let result = wait_for(
            &mut page,
            "#late",
            WaitCondition::Clickable,
            Duration::from_secs(5),
            Duration::ZERO,
        );
        assert!(result.is_ok());
        assert_eq!(page.probes, 3);
    }

    #[test]
    fn immediate_success_needs_one_probe() {
        let mut page = CountingPage::new(Some(0));
        wait_for(
            &mut page,
            "#present",
            WaitCondition::Present,
            Duration::ZERO,
            Duration::ZERO,
        )
        .unwrap();
        assert_eq!(page.probes, 1);
    }
}
