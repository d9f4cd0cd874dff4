//! Inbound text → explicit command mapping.
//!
//! Every keyboard button maps 1:1 to a [`Command`], so dialog logic never
//! matches on display text. Anything that is not a known button or command is
//! treated as value input for the state machine.

use fx_engine::{RecalcField, Scenario};

pub const BTN_RUBLES_TO_BAHT: &str = "💰 Рубли + Курс → Баты";
pub const BTN_BAHT_TO_RUBLES: &str = "🇹🇭 Баты + Курс → Рубли";
pub const BTN_RUBLES_PROFIT_TO_BAHT: &str = "📊 Рубли + Профит → Баты";
pub const BTN_BAHT_PROFIT_TO_RUBLES: &str = "💵 Баты + Профит → Рубли";
pub const BTN_SHOW_RATES: &str = "📈 Текущие курсы";
pub const BTN_MAIN_MENU: &str = "◀️ Главное меню";
pub const BTN_RECALC_RUBLES: &str = "🔄 Изменить рубли";
pub const BTN_RECALC_BAHT: &str = "🔄 Изменить баты";
pub const BTN_RECALC_RATE: &str = "🔄 Изменить курс";
pub const BTN_RECALC_PROFIT: &str = "🔄 Изменить профит";

/// Parsed inbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    MainMenu,
    ShowRates,
    StartScenario(Scenario),
    Recalc(RecalcField),
    /// Free text; a value for whatever the dialog is currently awaiting.
    Input(String),
}

impl Command {
    pub fn parse(text: &str) -> Command {
        match text.trim() {
            "/start" => Command::Start,
            BTN_MAIN_MENU => Command::MainMenu,
            BTN_SHOW_RATES => Command::ShowRates,
            BTN_RUBLES_TO_BAHT => Command::StartScenario(Scenario::RublesToBaht),
            BTN_BAHT_TO_RUBLES => Command::StartScenario(Scenario::BahtToRubles),
            BTN_RUBLES_PROFIT_TO_BAHT => Command::StartScenario(Scenario::RublesProfitToBaht),
            BTN_BAHT_PROFIT_TO_RUBLES => Command::StartScenario(Scenario::BahtProfitToRubles),
            BTN_RECALC_RUBLES => Command::Recalc(RecalcField::Rubles),
            BTN_RECALC_BAHT => Command::Recalc(RecalcField::Baht),
            BTN_RECALC_RATE => Command::Recalc(RecalcField::Rate),
            BTN_RECALC_PROFIT => Command::Recalc(RecalcField::Profit),
            _ => Command::Input(text.to_string()),
        }
    }

    /// Button label for a recalculation field.
    pub fn recalc_label(field: RecalcField) -> &'static str {
        match field {
            RecalcField::Rubles => BTN_RECALC_RUBLES,
            RecalcField::Baht => BTN_RECALC_BAHT,
            RecalcField::Rate => BTN_RECALC_RATE,
            RecalcField::Profit => BTN_RECALC_PROFIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_to_commands() {
        assert_eq!(Command::parse("/start"), Command::Start);
        assert_eq!(Command::parse(BTN_MAIN_MENU), Command::MainMenu);
        assert_eq!(Command::parse(BTN_SHOW_RATES), Command::ShowRates);
        assert_eq!(
            Command::parse(BTN_RUBLES_TO_BAHT),
            Command::StartScenario(Scenario::RublesToBaht)
        );
        assert_eq!(
            Command::parse(BTN_BAHT_PROFIT_TO_RUBLES),
            Command::StartScenario(Scenario::BahtProfitToRubles)
        );
        assert_eq!(
            Command::parse(BTN_RECALC_RATE),
            Command::Recalc(fx_engine::RecalcField::Rate)
        );
    }

    #[test]
    fn free_text_is_input() {
        assert_eq!(
            Command::parse("50000,5"),
            Command::Input("50000,5".to_string())
        );
        assert_eq!(Command::parse("abc"), Command::Input("abc".to_string()));
    }

    #[test]
    fn every_field_has_a_label() {
        for field in [
            RecalcField::Rubles,
            RecalcField::Baht,
            RecalcField::Rate,
            RecalcField::Profit,
        ] {
            assert_eq!(
                Command::parse(Command::recalc_label(field)),
                Command::Recalc(field)
            );
        }
    }
}
