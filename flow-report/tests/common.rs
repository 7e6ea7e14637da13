//! Shared fixtures for flow-report integration tests

#![allow(dead_code)]

use flow_report::{FlowResult, GatherMode, Step};
use url::Url;

/// Base address the report is opened from
pub const REPORT_ADDRESS: &str = "file:///Users/example/report.html";

/// Three-step flow: navigation, timespan, snapshot
pub const SAMPLE_FLOW_JSON: &str = r#"{
  "name": "Cereal search",
  "lhrs": [
    {
      "gatherMode": "navigation",
      "fetchTime": "2021-08-03T18:28:13.296Z",
      "finalUrl": "https://www.mikescerealshack.co/",
      "categories": {
        "performance": {"id": "performance", "title": "Performance", "score": 0.99},
        "accessibility": {"id": "accessibility", "title": "Accessibility", "score": 1},
        "best-practices": {"id": "best-practices", "title": "Best Practices", "score": 1},
        "seo": {"id": "seo", "title": "SEO", "score": 1},
        "pwa": {"id": "pwa", "title": "PWA", "score": 0.3}
      },
      "configSettings": {
        "formFactor": "mobile",
        "screenEmulation": {"width": 360, "height": 640},
        "emulatedUserAgent": "Mozilla/5.0 (Linux; Android 7.0; Moto G (4))",
        "channel": "cli"
      }
    },
    {
      "gatherMode": "timespan",
      "fetchTime": "2021-08-03T18:28:31.789Z",
      "finalUrl": "https://www.mikescerealshack.co/search?q=call+of+duty",
      "categories": {
        "performance": {"id": "performance", "title": "Performance", "score": 0.97},
        "best-practices": {"id": "best-practices", "title": "Best Practices", "score": 0.71},
        "seo": {"id": "seo", "title": "SEO", "score": 0},
        "pwa": {"id": "pwa", "title": "PWA", "score": 1}
      }
    },
    {
      "gatherMode": "snapshot",
      "fetchTime": "2021-08-03T18:28:44.109Z",
      "finalUrl": "https://www.mikescerealshack.co/search?q=call+of+duty",
      "categories": {
        "performance": {"id": "performance", "title": "Performance", "score": 0},
        "accessibility": {"id": "accessibility", "title": "Accessibility", "score": 0.9},
        "best-practices": {"id": "best-practices", "title": "Best Practices", "score": 0.88},
        "seo": {"id": "seo", "title": "SEO", "score": 0.85},
        "pwa": {"id": "pwa", "title": "PWA", "score": 1}
      }
    }
  ]
}"#;

pub fn sample_flow() -> FlowResult {
    FlowResult::from_json_str(SAMPLE_FLOW_JSON).expect("sample flow parses")
}

/// Build a flow with one bare step per mode, a second apart
pub fn flow_of(modes: &[GatherMode]) -> FlowResult {
    let steps = modes
        .iter()
        .enumerate()
        .map(|(i, mode)| Step {
            gather_mode: *mode,
            fetch_time: format!("2021-08-03T18:28:{:02}.000Z", i % 60)
                .parse()
                .expect("valid timestamp"),
            final_url: format!("https://example.com/{}", i),
            categories: vec![],
            config_settings: Default::default(),
        })
        .collect();
    FlowResult::new(steps).expect("non-empty flow")
}

pub fn address(s: &str) -> Url {
    Url::parse(s).expect("valid address")
}

pub fn report_address() -> Url {
    address(REPORT_ADDRESS)
}
