//! CLI result presenter.

use rotbench_orchestration::interfaces::{ResultPresenter, RunResult, Speedup, Strategy};

use crate::output::{format_millis, format_preview, format_speedup};
use crate::ui::heading;

/// Prints benchmark progress to stdout in the interactive layout.
pub struct CLIResultPresenter {
    preview_len: usize,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(preview_len: usize) -> Self {
        Self { preview_len }
    }

    fn run_heading(&self, strategy: Strategy) -> String {
        format!(
            "First {} elements after {} shift:",
            self.preview_len,
            strategy.label()
        )
    }

    fn time_line(run: &RunResult) -> String {
        let label = match run.strategy {
            Strategy::Sequential => "Single-threaded",
            Strategy::Parallel => "Multi-threaded",
        };
        format!("{label} time: {} ms", format_millis(run.duration))
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_initial(&self, preview: &[i32]) {
        println!(
            "{}",
            heading(&format!(
                "First {} elements of the initial vector:",
                self.preview_len
            ))
        );
        println!("{}", format_preview(preview));
    }

    fn present_run(&self, run: &RunResult) {
        println!();
        println!("{}", heading(&self.run_heading(run.strategy)));
        println!("{}", format_preview(&run.preview));
        println!("{}", Self::time_line(run));
    }

    fn present_speedup(&self, speedup: Speedup) {
        println!();
        println!("Speedup: {}", format_speedup(speedup));
    }
}
