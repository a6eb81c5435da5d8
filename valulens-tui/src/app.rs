//! Application state — single-owner, main-thread only.
//!
//! The worker thread communicates via `mpsc`; every mutation of the
//! displayed result goes through `apply_response`, which enforces the
//! request-sequencing rule: a response for anything but the latest
//! submitted request is dropped, so a late reply can never overwrite a
//! newer one.

use std::sync::mpsc::{Receiver, Sender};

use chrono::Local;
use serde::{Deserialize, Serialize};

use valulens_core::model::AnalysisResult;

use crate::worker::{WorkerCommand, WorkerResponse};

/// Status line while a request is outstanding.
pub const RUNNING_STATUS: &str = "Running filing-first analysis...";

/// Idle hint before the first request.
pub const IDLE_STATUS: &str = "Press s to enter a ticker";

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Snapshot,
    Financials,
    Metrics,
    Valuation,
    History,
    Notes,
    Chart,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Snapshot => 0,
            Panel::Financials => 1,
            Panel::Metrics => 2,
            Panel::Valuation => 3,
            Panel::History => 4,
            Panel::Notes => 5,
            Panel::Chart => 6,
            Panel::Help => 7,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Snapshot),
            1 => Some(Panel::Financials),
            2 => Some(Panel::Metrics),
            3 => Some(Panel::Valuation),
            4 => Some(Panel::History),
            5 => Some(Panel::Notes),
            6 => Some(Panel::Chart),
            7 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Snapshot => "Snapshot",
            Panel::Financials => "Financials",
            Panel::Metrics => "Metrics",
            Panel::Valuation => "Valuation",
            Panel::History => "History",
            Panel::Notes => "Notes",
            Panel::Chart => "Chart",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 8).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 7) % 8).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    TickerPrompt,
}

/// Top-level application state.
pub struct AppState {
    pub active_panel: Panel,
    pub running: bool,

    // The one piece of shared display state: the current result, fully
    // replaced (never patched) on each successful response.
    pub result: Option<AnalysisResult>,
    pub last_ticker: Option<String>,

    // Request lifecycle
    pub in_flight: bool,
    pub request_seq: u64,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Cross-cutting
    pub status_message: (String, StatusLevel),
    pub overlay: Overlay,
    pub ticker_input: String,
    pub scroll: u16,
}

impl AppState {
    pub fn new(worker_tx: Sender<WorkerCommand>, worker_rx: Receiver<WorkerResponse>) -> Self {
        Self {
            active_panel: Panel::Snapshot,
            running: true,
            result: None,
            last_ticker: None,
            in_flight: false,
            request_seq: 0,
            worker_tx,
            worker_rx,
            status_message: (IDLE_STATUS.to_string(), StatusLevel::Info),
            overlay: Overlay::None,
            ticker_input: String::new(),
            scroll: 0,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = (msg.into(), StatusLevel::Info);
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = (msg.into(), StatusLevel::Warning);
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = (format!("Error: {}", msg.into()), StatusLevel::Error);
    }

    /// Submit the current prompt input as a new analysis request.
    ///
    /// Clears any previously rendered output before the request starts;
    /// refused while a request is already outstanding.
    pub fn submit_ticker(&mut self) {
        if self.in_flight {
            self.set_warning("Analysis already running");
            return;
        }
        let ticker = self.ticker_input.trim().to_uppercase();
        if ticker.is_empty() {
            return;
        }

        self.result = None;
        self.scroll = 0;
        self.request_seq += 1;
        self.in_flight = true;
        self.last_ticker = Some(ticker.clone());
        self.set_status(RUNNING_STATUS);

        let sent = self.worker_tx.send(WorkerCommand::Analyze {
            seq: self.request_seq,
            ticker,
        });
        // A dead worker must not wedge the prompt shut.
        if sent.is_err() {
            self.in_flight = false;
            self.set_error("analysis worker is not running");
        }
    }

    /// Apply one worker response. Stale sequences are dropped.
    pub fn apply_response(&mut self, resp: WorkerResponse) {
        match resp {
            WorkerResponse::AnalysisComplete { seq, result } => {
                if seq != self.request_seq {
                    return;
                }
                self.in_flight = false;
                let completed = completion_time(result.as_of.as_deref());
                self.result = Some(*result);
                self.set_status(format!("Completed at {completed}"));
            }
            WorkerResponse::AnalysisFailed { seq, error } => {
                if seq != self.request_seq {
                    return;
                }
                self.in_flight = false;
                self.result = None;
                self.set_error(error);
            }
        }
    }
}

/// Local-time rendering of the payload's completion timestamp.
///
/// Unparsable timestamps show verbatim; an absent one falls back to the
/// response arrival time.
fn completion_time(as_of: Option<&str>) -> String {
    match as_of {
        Some(raw) => chrono::DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|_| raw.to_string()),
        None => Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn test_app() -> (AppState, Receiver<WorkerCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_resp_tx, resp_rx) = mpsc::channel();
        (AppState::new(cmd_tx, resp_rx), cmd_rx)
    }

    fn completed(seq: u64) -> WorkerResponse {
        WorkerResponse::AnalysisComplete {
            seq,
            result: Box::new(valulens_core::sample::sample_result()),
        }
    }

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Snapshot.next(), Panel::Financials);
        assert_eq!(Panel::Help.next(), Panel::Snapshot);
        assert_eq!(Panel::Snapshot.prev(), Panel::Help);
        for i in 0..8 {
            assert_eq!(Panel::from_index(i).unwrap().index(), i);
        }
        assert!(Panel::from_index(8).is_none());
    }

    #[test]
    fn submit_clears_previous_output_and_trims_input() {
        let (mut app, cmd_rx) = test_app();
        app.result = Some(valulens_core::sample::sample_result());
        app.ticker_input = "  msft \n".into();

        app.submit_ticker();

        assert!(app.result.is_none());
        assert!(app.in_flight);
        assert_eq!(app.status_message.0, RUNNING_STATUS);
        match cmd_rx.try_recv().unwrap() {
            WorkerCommand::Analyze { seq, ticker } => {
                assert_eq!(seq, 1);
                assert_eq!(ticker, "MSFT");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn submit_refused_while_in_flight() {
        let (mut app, cmd_rx) = test_app();
        app.ticker_input = "AAPL".into();
        app.submit_ticker();
        let _ = cmd_rx.try_recv().unwrap();

        app.ticker_input = "NVDA".into();
        app.submit_ticker();

        assert!(cmd_rx.try_recv().is_err());
        assert_eq!(app.request_seq, 1);
        assert_eq!(app.status_message.1, StatusLevel::Warning);
    }

    #[test]
    fn dead_worker_does_not_wedge_the_prompt() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_resp_tx, resp_rx) = mpsc::channel();
        let mut app = AppState::new(cmd_tx, resp_rx);
        drop(cmd_rx);

        app.ticker_input = "ACME".into();
        app.submit_ticker();

        assert!(!app.in_flight);
        assert_eq!(app.status_message.1, StatusLevel::Error);
        assert_eq!(app.status_message.0, "Error: analysis worker is not running");
    }

    #[test]
    fn blank_ticker_is_ignored() {
        let (mut app, cmd_rx) = test_app();
        app.ticker_input = "   ".into();
        app.submit_ticker();
        assert!(!app.in_flight);
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn success_sets_completed_status() {
        let (mut app, _cmd_rx) = test_app();
        app.ticker_input = "ACME".into();
        app.submit_ticker();

        app.apply_response(completed(1));

        assert!(!app.in_flight);
        assert!(app.result.is_some());
        assert!(app.status_message.0.starts_with("Completed at "));
    }

    #[test]
    fn failure_clears_output_and_sets_error_status() {
        let (mut app, _cmd_rx) = test_app();
        app.ticker_input = "ACME".into();
        app.submit_ticker();

        app.apply_response(WorkerResponse::AnalysisFailed {
            seq: 1,
            error: "Ticker history unavailable".into(),
        });

        assert!(app.result.is_none());
        assert_eq!(app.status_message.0, "Error: Ticker history unavailable");
        assert_eq!(app.status_message.1, StatusLevel::Error);
    }

    #[test]
    fn stale_response_is_dropped() {
        let (mut app, _cmd_rx) = test_app();
        app.ticker_input = "ACME".into();
        app.submit_ticker();
        app.apply_response(WorkerResponse::AnalysisFailed { seq: 1, error: "late".into() });

        app.ticker_input = "NEWCO".into();
        app.submit_ticker();
        assert_eq!(app.request_seq, 2);

        // a straggler for the first request arrives after resubmission
        app.apply_response(completed(1));
        assert!(app.result.is_none());
        assert_eq!(app.status_message.0, RUNNING_STATUS);

        // the current request's response still lands
        app.apply_response(completed(2));
        assert!(app.result.is_some());
    }

    #[test]
    fn completion_time_falls_back_to_raw_string() {
        assert_eq!(completion_time(Some("not a timestamp")), "not a timestamp");
        let parsed = completion_time(Some("2026-08-28T14:30:00Z"));
        assert!(parsed.starts_with("2026-08-28") || parsed.starts_with("2026-08-29"));
    }
}
