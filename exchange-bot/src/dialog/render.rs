//! Outbound texts and keyboards.
//!
//! All user-visible wording lives here; handlers deal only in commands and
//! calculations. Amount fields are thousands-grouped with 2 decimals, rates
//! are printed as-is (already rounded to 4 places by the engine).

use fx_engine::{Calculation, ExchangeRates, RecalcField, Scenario};
use xbot_core::Keyboard;

use super::command::{
    Command, BTN_BAHT_PROFIT_TO_RUBLES, BTN_BAHT_TO_RUBLES, BTN_MAIN_MENU,
    BTN_RUBLES_PROFIT_TO_BAHT, BTN_RUBLES_TO_BAHT, BTN_SHOW_RATES,
};

pub const GREETING: &str =
    "👋 Привет! Я бот для расчета обмена RUB → USDT → THB\n\nВыберите нужный сценарий расчета:";
pub const CHOOSE_SCENARIO: &str = "Выберите сценарий:";
pub const INVALID_NUMBER: &str = "❌ Ошибка! Введите число (например: 50000 или 2,6)";
pub const NO_SAVED_CALCULATION: &str = "❌ Нет сохраненных расчетов. Начните новый расчет.";
pub const RECALC_FAILED: &str = "❌ Произошла ошибка при пересчете";

/// Main menu: one button per scenario plus the rates view.
pub fn main_menu() -> Keyboard {
    Keyboard::Reply(vec![
        vec![BTN_RUBLES_TO_BAHT.to_string()],
        vec![BTN_BAHT_TO_RUBLES.to_string()],
        vec![BTN_RUBLES_PROFIT_TO_BAHT.to_string()],
        vec![BTN_BAHT_PROFIT_TO_RUBLES.to_string()],
        vec![BTN_SHOW_RATES.to_string()],
    ])
}

/// Recalculation keyboard: the scenario's two editable fields plus main menu.
pub fn recalc_keyboard(scenario: Scenario) -> Keyboard {
    let mut rows: Vec<Vec<String>> = scenario
        .recalc_fields()
        .iter()
        .map(|field| vec![Command::recalc_label(*field).to_string()])
        .collect();
    rows.push(vec![BTN_MAIN_MENU.to_string()]);
    Keyboard::Reply(rows)
}

/// Scenario header plus the first-value prompt.
pub fn scenario_intro(scenario: Scenario) -> String {
    let (header, prompt) = match scenario {
        Scenario::RublesToBaht => ("💰 Сценарий 1: Рубли + Курс → Баты", "Введите сумму в рублях:"),
        Scenario::BahtToRubles => ("🇹🇭 Сценарий 2: Баты + Курс → Рубли", "Введите количество батов:"),
        Scenario::RublesProfitToBaht => ("📊 Сценарий 3: Рубли + Профит → Баты", "Введите сумму в рублях:"),
        Scenario::BahtProfitToRubles => ("💵 Сценарий 4: Баты + Профит → Рубли", "Введите количество батов:"),
    };
    format!("{}\n\n{}", header, prompt)
}

/// Prompt for the scenario's second value.
pub fn second_prompt(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::RublesToBaht => "Введите курс для клиента (например, 2.6):",
        Scenario::BahtToRubles => "Введите курс для клиента:",
        Scenario::RublesProfitToBaht | Scenario::BahtProfitToRubles => {
            "Введите желаемый профит в батах:"
        }
    }
}

/// Prompt for a single recalculation value.
pub fn recalc_prompt(field: RecalcField) -> &'static str {
    match field {
        RecalcField::Rubles => "Введите новую сумму в рублях:",
        RecalcField::Baht => "Введите новое количество батов:",
        RecalcField::Rate => "Введите новый курс:",
        RecalcField::Profit => "Введите новый профит:",
    }
}

/// Full result text with the real rate/amount footnote.
pub fn result(calc: &Calculation) -> String {
    match calc {
        Calculation::RublesToBaht {
            rubles,
            client_rate,
            thb_client,
            profit,
            real_rate,
        } => format!(
            "✅ Результат расчета:\n\n💵 Рубли: {}\n📊 Курс для клиента: {}\n🇹🇭 Баты для клиента: {}\n💰 Ваш профит: {} THB\n\nРеальный курс: {}",
            amount(*rubles),
            client_rate,
            amount(*thb_client),
            amount(*profit),
            real_rate,
        ),
        Calculation::BahtToRubles {
            baht,
            client_rate,
            rubles_client,
            profit,
            rubles_real,
        } => format!(
            "✅ Результат расчета:\n\n🇹🇭 Баты: {}\n📊 Курс для клиента: {}\n💵 Рублей от клиента: {}\n💰 Ваш профит: {} THB\n\nРеальная стоимость: {} RUB",
            amount(*baht),
            client_rate,
            amount(*rubles_client),
            amount(*profit),
            amount(*rubles_real),
        ),
        Calculation::RublesProfitToBaht {
            rubles,
            desired_profit,
            thb_client,
            client_rate,
            thb_real,
        } => format!(
            "✅ Результат расчета:\n\n💵 Рубли: {}\n💰 Желаемый профит: {} THB\n🇹🇭 Баты для клиента: {}\n📊 Курс для клиента: {}\n\nРеальная сумма: {} THB",
            amount(*rubles),
            amount(*desired_profit),
            amount(*thb_client),
            client_rate,
            amount(*thb_real),
        ),
        Calculation::BahtProfitToRubles {
            baht,
            desired_profit,
            rubles_client,
            client_rate,
            rubles_real,
        } => format!(
            "✅ Результат расчета:\n\n🇹🇭 Баты: {}\n💰 Желаемый профит: {} THB\n💵 Рублей от клиента: {}\n📊 Курс для клиента: {}\n\nРеальная стоимость: {} RUB",
            amount(*baht),
            amount(*desired_profit),
            amount(*rubles_client),
            client_rate,
            amount(*rubles_real),
        ),
    }
}

/// Shorter text for a recalculated result (no footnote line).
pub fn recalculated(calc: &Calculation) -> String {
    let full = result(calc);
    let body = full
        .split("\n\nРеальн")
        .next()
        .unwrap_or(&full)
        .replacen("✅ Результат расчета:", "✅ Пересчет:", 1);
    body
}

/// Current rates view with the commission and the implied RUB/THB rate.
pub fn rates_view(rates: &ExchangeRates) -> String {
    format!(
        "📊 Текущие курсы:\n\nUSDT → THB: {}\nRUB → USDT: {}\nКомиссия: {}%\n\nИтоговый курс RUB/THB: {}",
        rates.usdt_to_thb,
        rates.rub_to_usdt,
        rates.commission * 100.0,
        rates.effective_rub_thb(),
    )
}

/// Thousands-grouped amount with 2 decimal places, e.g. 19230.769 → "19,230.77".
fn amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, int_grouped, frac_part)
}
