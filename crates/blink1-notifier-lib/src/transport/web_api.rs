//! blink(1) local web API (`blink1-server`).
//!
//! One blocking GET per signal. The response body is drained so the
//! connection is released, then dropped; the status code is not inspected.

use std::io::Write;
use std::time::Duration;

use super::{Blink1Transport, ConnectionReport};
use crate::error::Result;
use crate::led::Color;

/// RGB parameter sent by the connectivity test (blue).
const TEST_RGB: &str = "0000FF";

/// Render a fade delay the way the web API expects: `0.5`, `1.0`.
pub fn format_delay(seconds: f64) -> String {
    format!("{seconds:?}")
}

fn rgb_url(url_base: &str, rgb: &str, fade_delay: f64) -> String {
    format!(
        "{url_base}/blink1/fadeToRGB?rgb=%23{rgb}&time={}",
        format_delay(fade_delay)
    )
}

/// `{url_base}/blink1/fadeToRGB?rgb=%23{hex}&time={delay}`
pub fn fade_url(url_base: &str, color: Color, fade_delay: f64) -> String {
    rgb_url(url_base, &color.hex(), fade_delay)
}

/// URL used by the connectivity test.
pub fn test_url(url_base: &str, fade_delay: f64) -> String {
    rgb_url(url_base, TEST_RGB, fade_delay)
}

/// Issue a GET and drain the body.
fn get(url: &str) -> Result<()> {
    // No timeout: a hung daemon blocks the caller.
    let client = reqwest::blocking::Client::builder().timeout(None::<Duration>).build()?;
    let mut response = client.get(url).send()?;
    log::debug!("web API answered {} for {url}", response.status());
    std::io::copy(&mut response, &mut std::io::sink())?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct WebApi {
    url_base: String,
}

impl WebApi {
    pub fn new(url_base: impl Into<String>) -> Self {
        WebApi {
            url_base: url_base.into(),
        }
    }

    pub fn url_base(&self) -> &str {
        &self.url_base
    }
}

impl Blink1Transport for WebApi {
    fn fade_to_rgb(&self, color: Color, fade_delay: f64, _build_log: &mut dyn Write) -> Result<()> {
        let url = fade_url(&self.url_base, color, fade_delay);
        log::debug!("GET {url}");
        get(&url)
    }

    fn test_blink(&self, fade_delay: f64) -> ConnectionReport {
        let url = test_url(&self.url_base, fade_delay);
        match get(&url) {
            Ok(()) => ConnectionReport::sent(format!("Request sent: {url}")),
            Err(e) => {
                log::warn!("blink(1) web API test failed: {e}");
                ConnectionReport::failed(format!("Error occurred: {e} ({url})"))
            }
        }
    }
}
