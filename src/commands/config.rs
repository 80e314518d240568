use crate::commands::{CmdMessage, CmdResult};
use crate::config::ShelfConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetCurrencySymbol(String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ShelfConfig::load(data_dir).unwrap_or_default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::SetCurrencySymbol(symbol) => {
            config.currency_symbol = symbol;
            config.save(data_dir)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success("Configuration updated"));
            Ok(result)
        }
    }
}
