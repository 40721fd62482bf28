//! CLI execution context.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context as _, Result};
use larek_app::{logging, Coordinator};
use larek_commerce::{ShopBus, ShopEvent, Storefront};
use larek_core::StorefrontConfig;
use larek_data::LarekApi;
use larek_events::DispatchFailure;
use tracing::debug;

use crate::output::Output;
use crate::terminal::TerminalView;

/// Execution context for CLI commands.
pub struct Context {
    /// Effective storefront configuration.
    pub config: StorefrontConfig,
    /// File the configuration came from, if any.
    pub config_source: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Resolve configuration and install logging.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = StorefrontConfig::resolve(config_path, &cwd)
            .context("Failed to load configuration")?;
        let config_source = config_path
            .map(Path::to_path_buf)
            .or_else(|| StorefrontConfig::find(&cwd));

        let mut log = config.log.clone();
        if output.is_verbose() {
            log.level = "debug".to_string();
        }
        logging::init(&log).context("Failed to initialize logging")?;
        debug!(source = ?config_source, api = %config.api.base_url, "configuration resolved");

        Ok(Self {
            config,
            config_source,
            output,
        })
    }

    /// Build the API client for the configured endpoints.
    pub fn api(&self) -> Result<Rc<LarekApi>> {
        let api = LarekApi::new(&self.config.api).context("Failed to create API client")?;
        Ok(Rc::new(api))
    }

    /// A fresh storefront with a coordinator rendering to the terminal.
    pub fn session(&self) -> Result<Session> {
        let api = self.api()?;
        let shop = Storefront::new();
        let view = Rc::new(TerminalView::new(self.output.clone()));
        logging::trace_events(shop.bus());
        let coordinator = Coordinator::install(shop.clone(), api.clone(), view.clone());

        Ok(Session {
            shop,
            api,
            view,
            coordinator,
            output: self.output.clone(),
        })
    }
}

/// Everything one command run needs to drive the storefront.
pub struct Session {
    pub shop: Storefront,
    pub api: Rc<LarekApi>,
    pub view: Rc<TerminalView>,
    pub coordinator: Rc<Coordinator>,
    output: Output,
}

impl Session {
    /// Emit an event and warn about any handler that failed on it.
    pub fn emit(&self, event: &ShopEvent) {
        self.shop.bus().emit(event);
        self.report_failures();
    }

    /// Warn about handler failures recorded since the last report.
    pub fn report_failures(&self) {
        report_failures(self.shop.bus(), &self.output);
    }
}

/// Drain the bus's recorded failures into warnings.
pub fn report_failures(bus: &ShopBus, output: &Output) -> usize {
    let failures = bus.take_failures();
    for failure in &failures {
        output.warn(&failure_message(failure));
    }
    failures.len()
}

fn failure_message(failure: &DispatchFailure) -> String {
    format!(
        "{} handler {} failed: {}",
        failure.event, failure.subscription, failure.error
    )
}
