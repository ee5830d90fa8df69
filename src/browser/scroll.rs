use super::manager::BrowserError;
use super::page::Page;
use log::{debug, warn};
use std::time::Duration;

/// Scroll to the bottom repeatedly until the document height stops growing.
///
/// Each round scrolls, sleeps `pause` so lazily-loaded content can render,
/// and re-measures. The loop stops on the first measurement equal to the
/// previous one, so it never ends before two consecutive equal heights.
/// Returns the number of rounds performed.
///
/// Termination is only guaranteed if the page eventually stops growing.
/// `max_rounds` bounds a pathological page; `None` keeps the unbounded
/// behavior for typical pages.
pub fn scroll_until_stable<P: Page>(
    page: &mut P,
    pause: Duration,
    max_rounds: Option<u32>,
) -> Result<u32, BrowserError> {
    let mut last_height = page.scroll_height()?;
    let mut rounds = 0u32;

    loop {
        if let Some(cap) = max_rounds {
            if rounds >= cap {
                warn!(
                    "scroll cap of {} rounds reached before page height stabilized",
                    cap
                );
                break;
            }
        }

        page.scroll_to_bottom()?;
        std::thread::sleep(pause);

        let height = page.scroll_height()?;
        rounds += 1;
        debug!("scroll round {}: height {} -> {}", rounds, last_height, height);

        if height == last_height {
            break;
        }
        last_height = height;
    }

    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::page::WaitCondition;

    /// Page with a scripted sequence of height measurements. Once the
    /// script runs out the last height repeats; `grow_forever` instead
    /// increases the height on every measurement.
    struct ScrollingPage {
        heights: Vec<u64>,
        measured: usize,
        scrolls: u32,
        grow_forever: bool,
    }

    impl ScrollingPage {
        fn scripted(heights: Vec<u64>) -> Self {
            Self {
                heights,
                measured: 0,
                scrolls: 0,
                grow_forever: false,
            }
        }

        fn infinite() -> Self {
            Self {
                heights: Vec::new(),
                measured: 0,
                scrolls: 0,
                grow_forever: true,
            }
        }
    }

    impl Page for ScrollingPage {
        fn navigate(&mut self, _url: &str) -> Result<(), BrowserError> {
            Ok(())
        }

        fn probe(&mut self, _locator: &str, _condition: WaitCondition) -> Result<bool, BrowserError> {
            Ok(true)
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
            self.measured += 1;
            if self.grow_forever {
                return Ok(self.measured as u64 * 100);
            }
            let idx = (self.measured - 1).min(self.heights.len() - 1);
            Ok(self.heights[idx])
        }

        fn scroll_to_bottom(&mut self) -> Result<(), BrowserError> {
            self.scrolls += 1;
            Ok(())
        }

        fn page_source(&mut self) -> Result<String, BrowserError> {
            Ok(String::new())
        }
    }

    #[test]
    fn stops_once_height_stabilizes() {
        // 1000 -> 1400 -> 1800 -> 1800: stable on the third re-measure.
        let mut page = ScrollingPage::scripted(vec![1000, 1400, 1800, 1800]);
        let rounds = scroll_until_stable(&mut page, Duration::ZERO, None).unwrap();
        assert_eq!(rounds, 3);
        assert_eq!(page.scrolls, 3);
    }

    #[test]
    fn never_stops_before_two_equal_measurements() {
        // Height still changed on the last scripted growth step, so a
        // second, confirming round is required.
        let mut page = ScrollingPage::scripted(vec![500, 600, 600]);
        let rounds = scroll_until_stable(&mut page, Duration::ZERO, None).unwrap();
        assert_eq!(rounds, 2);
    }

    #[test]
    fn already_stable_page_takes_one_round() {
        let mut page = ScrollingPage::scripted(vec![900, 900]);
        let rounds = scroll_until_stable(&mut page, Duration::ZERO, None).unwrap();
        assert_eq!(rounds, 1);
    }

    #[test]
    fn cap_bounds_a_page_that_never_stabilizes() {
        let mut page = ScrollingPage::infinite();
        let rounds = scroll_until_stable(&mut page, Duration::ZERO, Some(7)).unwrap();
        assert_eq!(rounds, 7);
        assert_eq!(page.scrolls, 7);
    }
}
