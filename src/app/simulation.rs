use rust_decimal::Decimal;
use thiserror::Error;

pub const MONTHS_PER_YEAR: u32 = 12;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("initial deposit {0:?} is not a number")]
    Deposit(String),
    #[error("annual interest rate {0:?} is not a number")]
    Rate(String),
    #[error("number of years {0:?} is not a whole number")]
    Years(String),
    #[error("number of years must be at least 1")]
    NoYears,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdjustmentError {
    #[error("new rate {0:?} is not a number")]
    Rate(String),
    #[error("additional deposit {0:?} is not a number")]
    Deposit(String),
}

/// Validated startup inputs. No simulation exists until all three fields parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub deposit: Decimal,
    pub annual_rate: Decimal,
    pub years: u32,
}

impl Inputs {
    pub fn parse(deposit: &str, rate: &str, years: &str) -> Result<Self, InputError> {
        let deposit = deposit.trim();
        let deposit = deposit
            .parse()
            .map_err(|_| InputError::Deposit(deposit.to_owned()))?;
        let rate = rate.trim();
        let annual_rate = rate.parse().map_err(|_| InputError::Rate(rate.to_owned()))?;
        let years = years.trim();
        let years: u32 = years
            .parse()
            .map_err(|_| InputError::Years(years.to_owned()))?;
        if years == 0 {
            return Err(InputError::NoYears);
        }
        Ok(Self {
            deposit,
            annual_rate,
            years,
        })
    }
}

/// Per-year overrides collected between years. An empty rate field leaves the
/// rate alone; an empty deposit field adds nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Adjustment {
    pub rate: Option<Decimal>,
    pub deposit: Decimal,
}

impl Adjustment {
    pub fn parse(rate: &str, deposit: &str) -> Result<Self, AdjustmentError> {
        let rate = rate.trim();
        let rate = if rate.is_empty() {
            None
        } else {
            Some(
                rate.parse()
                    .map_err(|_| AdjustmentError::Rate(rate.to_owned()))?,
            )
        };
        let deposit = deposit.trim();
        let deposit = if deposit.is_empty() {
            Decimal::ZERO
        } else {
            deposit
                .parse()
                .map_err(|_| AdjustmentError::Deposit(deposit.to_owned()))?
        };
        Ok(Self { rate, deposit })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Running the twelve monthly steps of `year`.
    Compounding { year: u32 },
    /// Paused before `year` until the user submits an adjustment.
    AwaitingAdjustment { year: u32 },
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthEntry {
    pub month: u32,
    pub balance: Decimal,
}

/// One calculation run, advanced a year at a time by the caller. Year 1 starts
/// immediately; every later year waits for an `Adjustment` first.
#[derive(Debug, Clone)]
pub struct Simulation {
    phase: Phase,
    balance: Decimal,
    annual_rate: Decimal,
    years: u32,
    original_deposit: Decimal,
    monthly: Vec<MonthEntry>,
}

impl Simulation {
    pub fn new(inputs: Inputs) -> Self {
        Self {
            phase: Phase::Compounding { year: 1 },
            balance: inputs.deposit,
            annual_rate: inputs.annual_rate,
            years: inputs.years,
            original_deposit: inputs.deposit,
            monthly: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn annual_rate(&self) -> Decimal {
        self.annual_rate
    }

    pub fn original_deposit(&self) -> Decimal {
        self.original_deposit
    }

    pub fn months(&self) -> &[MonthEntry] {
        &self.monthly
    }

    pub fn year_entries(&self, year: u32) -> &[MonthEntry] {
        let end = year as usize * MONTHS_PER_YEAR as usize;
        let start = end.saturating_sub(MONTHS_PER_YEAR as usize);
        self.monthly.get(start..end).unwrap_or(&[])
    }

    /// Compound the current year, month by month. Returns the year just
    /// finished, or `None` when the run is paused or already complete.
    pub fn advance_year(&mut self) -> Option<u32> {
        let Phase::Compounding { year } = self.phase else {
            return None;
        };

        // overflow of the 28-digit Decimal range collapses to zero
        let monthly_rate = self
            .annual_rate
            .checked_div(Decimal::ONE_HUNDRED)
            .and_then(|r| r.checked_div(MONTHS_PER_YEAR.into()))
            .unwrap_or_default();
        for month in 1..=MONTHS_PER_YEAR {
            let interest = self.balance.checked_mul(monthly_rate).unwrap_or_default();
            self.balance = self.balance.checked_add(interest).unwrap_or_default();
            self.monthly.push(MonthEntry {
                month: month + (year - 1) * MONTHS_PER_YEAR,
                balance: self.balance,
            });
        }

        self.phase = if year < self.years {
            Phase::AwaitingAdjustment { year: year + 1 }
        } else {
            Phase::Completed
        };
        Some(year)
    }

    /// Resume a paused run. A negative rate or deposit is dropped silently;
    /// anything else replaces the rate or tops up the balance before the next
    /// year compounds. A no-op outside `AwaitingAdjustment`.
    pub fn apply_adjustment(&mut self, adjustment: Adjustment) {
        let Phase::AwaitingAdjustment { year } = self.phase else {
            return;
        };

        if let Some(rate) = adjustment.rate {
            if rate >= Decimal::ZERO {
                self.annual_rate = rate;
            }
        }
        if adjustment.deposit >= Decimal::ZERO {
            self.balance = self
                .balance
                .checked_add(adjustment.deposit)
                .unwrap_or_default();
        }
        self.phase = Phase::Compounding { year };
    }
}
