//! Background worker thread — the network call runs here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The
//! worker owns the analysis client and serves one request at a time;
//! the main thread's sequence numbers decide which responses still
//! matter.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use valulens_core::model::AnalysisResult;
use valulens_core::{AnalysisClient, ClientConfig};

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    Analyze { seq: u64, ticker: String },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug)]
pub enum WorkerResponse {
    AnalysisComplete { seq: u64, result: Box<AnalysisResult> },
    AnalysisFailed { seq: u64, error: String },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    config: ClientConfig,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("valulens-worker".into())
        .spawn(move || worker_loop(rx, tx, config))
        .expect("failed to spawn worker thread")
}

fn worker_loop(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>, config: ClientConfig) {
    let client = match AnalysisClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            // Without a client every request fails the same way; report
            // failures as they are asked for.
            for cmd in rx.iter() {
                match cmd {
                    WorkerCommand::Analyze { seq, .. } => {
                        let _ = tx.send(WorkerResponse::AnalysisFailed {
                            seq,
                            error: e.to_string(),
                        });
                    }
                    WorkerCommand::Shutdown => break,
                }
            }
            return;
        }
    };

    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Analyze { seq, ticker }) => {
                let resp = match client.analyze(&ticker) {
                    Ok(result) => WorkerResponse::AnalysisComplete {
                        seq,
                        result: Box::new(result),
                    },
                    Err(e) => WorkerResponse::AnalysisFailed {
                        seq,
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(resp);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn worker_shutdown() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, _resp_rx) = mpsc::channel();

        let handle = spawn_worker(cmd_rx, resp_tx, ClientConfig::default());
        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().expect("worker should join cleanly");
    }

    #[test]
    fn worker_exits_when_channel_closes() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, _resp_rx) = mpsc::channel();

        let handle = spawn_worker(cmd_rx, resp_tx, ClientConfig::default());
        drop(cmd_tx);
        handle.join().expect("worker should join cleanly");
    }
}
