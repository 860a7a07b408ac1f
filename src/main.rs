//! mygas: command-line front-end for the MyGas API
//!
//! Signs in with the given credentials and prints the requested data as
//! pretty JSON. Per-account commands walk every ELS group and its LSPU
//! accounts, then the standalone LSPU accounts; a failure for one account
//! is reported and the walk continues.

use anyhow::Context;
use clap::{ArgAction, Parser};
use serde_json::Value;

use mygas_api::{Identifier, MeterReading, MyGasApi, MyGasConfig, Password, Receipt};

#[derive(Parser)]
#[command(name = "mygas", version, about = "Command line tool for MyGas API")]
struct Cli {
    /// User identifier (e-mail) for MyGas API
    #[arg(env = "MYGAS_IDENTIFIER")]
    identifier: String,

    /// Password for MyGas API
    #[arg(env = "MYGAS_PASSWORD", hide_env_values = true)]
    password: String,

    /// Get client info
    #[arg(long)]
    client: bool,

    /// Get accounts info
    #[arg(long)]
    accounts: bool,

    /// Get charges for every account
    #[arg(long)]
    charges: bool,

    /// Get payments for every account
    #[arg(long)]
    payments: bool,

    /// Get the current month's receipt for every account
    #[arg(long)]
    receipt: bool,

    /// Get detailed info for every account
    #[arg(long)]
    info: bool,

    /// Send a meter reading
    #[arg(long, num_args = 3, value_names = ["LSPU_ID", "EQUIPMENT_ID", "VALUE"])]
    send: Option<Vec<String>>,

    /// ELS account the meter belongs to, if any
    #[arg(long, requires = "send")]
    els_id: Option<i64>,

    /// Increase verbosity level (-v warn, -vv info, -vvv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let config = MyGasConfig::builder()
        .identifier(Identifier::new(cli.identifier.as_str())?)
        .password(Password::new(cli.password.as_str())?)
        .build()?;
    let api = MyGasApi::new(&config)?;
    let identifier = config.identifier().as_ref();

    if cli.client {
        println!("Client info about {identifier}:");
        print_json(&api.get_client_info().await?)?;
    }

    let needs_accounts = cli.accounts || cli.charges || cli.payments || cli.receipt || cli.info;
    if needs_accounts {
        let accounts = api.get_accounts().await?;
        if cli.accounts {
            println!("Accounts for {identifier}:");
            print_json(&accounts)?;
        }
        if cli.charges {
            println!("Charges for {identifier}:");
            for (lspu_id, account) in lspu_accounts(&accounts) {
                report(&account, "charges", api.get_charges(lspu_id).await)?;
            }
        }
        if cli.payments {
            println!("Payments for {identifier}:");
            for (lspu_id, account) in lspu_accounts(&accounts) {
                report(&account, "payments", api.get_payments(lspu_id).await)?;
            }
        }
        if cli.receipt {
            println!("Receipts for {identifier}:");
            receipts(&api, identifier, &accounts).await?;
        }
        if cli.info {
            println!("Info for {identifier}:");
            info(&api, &accounts).await?;
        }
    }

    if let Some(args) = cli.send.as_deref() {
        let reading = parse_reading(args, cli.els_id)?;
        let info = match reading.els_id {
            Some(els_id) => api.get_els_info(els_id).await?,
            None => api.get_lspu_info(reading.lspu_id).await?,
        };
        match last_reading(&info, &reading.equipment_id) {
            Some(last) => check_not_below(reading.value, last)?,
            None => tracing::warn!(
                equipment_id = %reading.equipment_id,
                "No previous reading found for meter"
            ),
        }
        let result = api
            .send_indication(&reading)
            .await
            .context("Try sending this meter reading again in 5 minutes")?;
        print_json(&result)?;
    }

    Ok(())
}

const fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    }
}

fn setup_tracing(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report(
    account: &str,
    what: &str,
    result: Result<Value, mygas_api::ApiError>,
) -> anyhow::Result<()> {
    match result {
        Ok(value) => {
            println!("{what} for {account}:");
            print_json(&value)
        }
        Err(e) => {
            eprintln!("Error getting {what} for {account}: {e}");
            Ok(())
        }
    }
}

fn array(value: &Value) -> &[Value] {
    value.as_array().map_or(&[], Vec::as_slice)
}

fn label(value: &Value, key: &str) -> String {
    match &value[key] {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// ELS groups as `(els id, label)`.
fn els_accounts(accounts: &Value) -> Vec<(i64, String)> {
    array(&accounts["elsGroup"])
        .iter()
        .filter_map(|group| {
            let els = &group["els"];
            let id = els["id"].as_i64()?;
            Some((id, format!("{id} ({})", label(els, "alias"))))
        })
        .collect()
}

/// LSPU accounts, grouped ones first, as `(lspu id, account number)`.
fn lspu_accounts(accounts: &Value) -> Vec<(i64, String)> {
    let grouped = array(&accounts["elsGroup"])
        .iter()
        .flat_map(|group| array(&group["lspu"]));
    grouped
        .chain(array(&accounts["lspu"]))
        .filter_map(|lspu| Some((lspu["id"].as_i64()?, label(lspu, "account"))))
        .collect()
}

/// Standalone LSPU accounts, outside any ELS group.
fn standalone_lspu_accounts(accounts: &Value) -> Vec<(i64, String)> {
    array(&accounts["lspu"])
        .iter()
        .filter_map(|lspu| Some((lspu["id"].as_i64()?, label(lspu, "account"))))
        .collect()
}

async fn receipts(api: &MyGasApi, email: &str, accounts: &Value) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();
    for (els_id, account) in els_accounts(accounts) {
        let receipt = Receipt::new(today, email, els_id, true);
        report(&account, "receipt", api.get_receipt(&receipt).await)?;
    }
    for (lspu_id, account) in standalone_lspu_accounts(accounts) {
        let receipt = Receipt::new(today, email, lspu_id, false);
        report(&account, "receipt", api.get_receipt(&receipt).await)?;
    }
    Ok(())
}

async fn info(api: &MyGasApi, accounts: &Value) -> anyhow::Result<()> {
    for (els_id, account) in els_accounts(accounts) {
        report(&account, "info", api.get_els_info(els_id).await)?;
    }
    for (lspu_id, account) in standalone_lspu_accounts(accounts) {
        report(&account, "info", api.get_lspu_info(lspu_id).await)?;
    }
    Ok(())
}

fn parse_reading(args: &[String], els_id: Option<i64>) -> anyhow::Result<MeterReading> {
    let [lspu_id, equipment_id, value] = args else {
        anyhow::bail!("--send expects LSPU_ID EQUIPMENT_ID VALUE");
    };
    let lspu_id = lspu_id
        .parse::<i64>()
        .with_context(|| format!("Invalid LSPU id '{lspu_id}'"))?;
    let value = value
        .parse::<f64>()
        .with_context(|| format!("Invalid meter value '{value}'"))?;
    if !value.is_finite() || value < 0.0 {
        anyhow::bail!("Meter value must be a non-negative number");
    }

    let reading = MeterReading::new(lspu_id, equipment_id.as_str(), value);
    Ok(match els_id {
        Some(els_id) => reading.els_id(els_id),
        None => reading,
    })
}

/// Counters of an ELS info (`lspuInfoGroup[*].counters`) or LSPU info (`counters`).
fn counters(info: &Value) -> impl Iterator<Item = &Value> {
    let grouped = array(&info["lspuInfoGroup"])
        .iter()
        .flat_map(|lspu| array(&lspu["counters"]));
    grouped.chain(array(&info["counters"]))
}

/// The most recent recorded value of the meter with the given UUID.
fn last_reading(info: &Value, equipment_id: &str) -> Option<f64> {
    let counter = counters(info).find(|counter| counter["uuid"] == equipment_id)?;
    let latest = array(&counter["values"]).first()?;
    ["valueDay", "value"]
        .iter()
        .find_map(|key| match &latest[*key] {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
}

fn check_not_below(value: f64, last: f64) -> anyhow::Result<()> {
    if value < last {
        anyhow::bail!("New value {value} is less than last value {last}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn accounts() -> Value {
        json!({
            "elsGroup": [{
                "els": {"id": 1, "jntAccountNum": "111111111111", "alias": "Home"},
                "lspu": [{"id": 10, "account": "101010101010", "alias": ""}],
            }],
            "lspu": [{"id": 20, "account": "202020202020", "alias": "Office"}],
        })
    }

    #[test]
    fn test_lspu_accounts_lists_grouped_then_standalone() {
        assert_eq!(
            lspu_accounts(&accounts()),
            vec![
                (10, "101010101010".to_string()),
                (20, "202020202020".to_string())
            ]
        );
        assert_eq!(
            standalone_lspu_accounts(&accounts()),
            vec![(20, "202020202020".to_string())]
        );
    }

    #[test]
    fn test_els_accounts_labels() {
        assert_eq!(els_accounts(&accounts()), vec![(1, "1 (Home)".to_string())]);
    }

    #[test]
    fn test_empty_accounts_yield_nothing() {
        let empty = json!({});
        assert!(els_accounts(&empty).is_empty());
        assert!(lspu_accounts(&empty).is_empty());
    }

    #[test]
    fn test_parse_reading() {
        let args = ["10".to_string(), "uuid-1".to_string(), "123.5".to_string()];
        let reading = parse_reading(&args, Some(1)).unwrap();
        assert_eq!(reading.lspu_id, 10);
        assert_eq!(reading.equipment_id, "uuid-1");
        assert!((reading.value - 123.5).abs() < f64::EPSILON);
        assert_eq!(reading.els_id, Some(1));
    }

    #[test]
    fn test_parse_reading_rejects_bad_value() {
        let args = ["10".to_string(), "uuid-1".to_string(), "abc".to_string()];
        assert!(parse_reading(&args, None).is_err());

        let args = ["10".to_string(), "uuid-1".to_string(), "-1".to_string()];
        assert!(parse_reading(&args, None).is_err());
    }

    fn els_info() -> Value {
        json!({
            "lspuInfoGroup": [{
                "accountId": 10,
                "counters": [{
                    "lspuId": 10,
                    "name": "Gas meter",
                    "uuid": "uuid-1",
                    "values": [
                        {"valueDay": "100", "date": "2026-01-01", "state": "ok"},
                        {"valueDay": "90", "date": "2025-12-01", "state": "ok"},
                    ],
                }],
            }],
        })
    }

    #[test]
    fn test_last_reading_from_els_info() {
        assert_eq!(last_reading(&els_info(), "uuid-1"), Some(100.0));
        assert_eq!(last_reading(&els_info(), "uuid-9"), None);
    }

    #[test]
    fn test_last_reading_from_lspu_info() {
        let info = json!({
            "accountId": 20,
            "counters": [{"uuid": "uuid-2", "values": [{"value": 200.5}]}],
        });
        assert_eq!(last_reading(&info, "uuid-2"), Some(200.5));

        let no_values = json!({"counters": [{"uuid": "uuid-2", "values": []}]});
        assert_eq!(last_reading(&no_values, "uuid-2"), None);
    }

    #[test]
    fn test_value_below_last_reading_is_refused() {
        let err = check_not_below(99.5, 100.0).unwrap_err();
        assert_eq!(err.to_string(), "New value 99.5 is less than last value 100");
        assert!(check_not_below(100.0, 100.0).is_ok());
        assert!(check_not_below(120.0, 100.0).is_ok());
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_level(0), "error");
        assert_eq!(default_level(1), "warn");
        assert_eq!(default_level(2), "info");
        assert_eq!(default_level(3), "debug");
        assert_eq!(default_level(7), "debug");
    }

    #[test]
    fn test_cli_parses_send() {
        let cli = Cli::try_parse_from([
            "mygas", "user", "pass", "--send", "10", "uuid-1", "5", "--els-id", "1",
        ])
        .unwrap();
        assert_eq!(cli.send.as_deref().map(<[String]>::len), Some(3));
        assert_eq!(cli.els_id, Some(1));
    }
}
