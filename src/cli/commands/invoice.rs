use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::invoice::{GatewayMode, build_gateway, submit_invoices};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use crate::utils::date::today;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Invoice { latest, live, mock } = cmd {
        let mode = if *live {
            GatewayMode::Live
        } else if *mock {
            GatewayMode::Mock
        } else {
            GatewayMode::from_config(cfg)
        };

        let store = open_store(cfg);
        let labels: &[String] = if *latest {
            let n = store.len();
            &store.labels()[n.saturating_sub(1)..]
        } else {
            store.labels()
        };

        if labels.is_empty() {
            return Err(AppError::Gateway("No data to invoice.".into()));
        }

        let gateway = build_gateway(mode, &cfg.square)?;
        info(format!(
            "Submitting {} invoice(s) through the {} gateway ({} mode)",
            labels.len(),
            gateway.name(),
            mode.as_str()
        ));

        let batch = submit_invoices(gateway.as_ref(), labels, today());

        for label in &batch.invoiced {
            success(format!("Invoice created for {label}"));
        }
        if let Some((label, reason)) = &batch.failure {
            error(format!("Failed to create invoice for {label}: {reason}"));
        }
        if batch.not_attempted > 0 {
            warning(format!("{} record(s) not submitted.", batch.not_attempted));
        }

        let invoiced = batch.into_result()?;
        success(format!("{} invoice(s) created.", invoiced.len()));
    }

    Ok(())
}
