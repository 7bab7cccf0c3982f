mod config;
mod writer;

use tbe::ids::AccountNumber;
use tbe::models::{BankOperations, Person};
use tbe::reports;
use tbe::services::BankingSystem;
use tbe::{Money, Result};

use anyhow::Context;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning demo scenario...");

    let mut bank = tbe::build_banking_system();

    let savings_number = run_demo_scenario(&mut bank)?;

    log::debug!("Scenario complete. Beginning report...");

    report_to_std_out(&bank, savings_number.as_str())?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Stands in for the interactive front end: opens one account of each
/// kind and moves some money around, using only the registry's API.
fn run_demo_scenario(bank: &mut BankingSystem) -> Result<AccountNumber> {
    let alice = Person::new("Alice Chen".to_string(), "alice@example.com".to_string());
    let bob = Person::new("Bob Osei".to_string(), "bob@example.com".to_string());

    let savings_number = bank
        .create_savings_account(alice.clone(), Money::parse("100")?, Money::parse("50")?, 0.05)
        .number()
        .clone();

    let current_number = bank
        .create_current_account(alice.clone(), Money::ZERO, Money::parse("100")?)
        .number()
        .clone();

    let fixed = bank.create_fixed_deposit_account(bob, Money::parse("1000")?, 12, 0.07);
    log::debug!(
        "Fixed deposit {} matures on {} at a projected {}",
        fixed.number(),
        fixed.maturity_date(),
        fixed.calculate_maturity_amount()
    );

    if let Err(rejection) = fixed.deposit(Money::parse("10")?) {
        log::warn!("Deposit on {} rejected: {rejection}", fixed.number());
    }

    log::debug!("Alice owns {} accounts", bank.accounts_by_owner(&alice).len());

    let savings = bank
        .find_account_by_number_mut(savings_number.as_str())
        .context("savings account missing from the registry")?;

    savings.deposit(Money::parse("25")?)?;

    if let Err(rejection) = savings.withdraw(Money::parse("500")?) {
        log::warn!("Withdrawal from {savings_number} rejected: {rejection}");
    }

    savings.withdraw(Money::parse("75")?)?;

    let current = bank
        .find_account_by_number_mut(current_number.as_str())
        .context("current account missing from the registry")?;

    // Goes overdrawn, which also charges the overdraft fee
    current.withdraw(Money::parse("50")?)?;
    current.deposit(Money::parse("80")?)?;

    bank.apply_interest_to_all_savings();

    return Ok(savings_number);
}

/// Writes the account report and the savings account's recent statement
/// to stdout as CSV.
fn report_to_std_out(bank: &BankingSystem, savings_number: &str) -> Result {
    let report = bank.build_report();
    log::debug!("Successfully built reports for {} accounts", report.len());

    println!("{}", writer::rows_to_csv(&report)?);

    let account = bank
        .find_account_by_number(savings_number)
        .context("savings account missing from the registry")?;

    let statement = reports::build_statement(account, 10);

    println!("{}", writer::rows_to_csv(&statement)?);

    Ok(())
}
