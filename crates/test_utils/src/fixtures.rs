//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the billing
//! engine. These fixtures are designed to be consistent and predictable for
//! unit tests.

use chrono::NaiveDate;
use core_kernel::{Currency, Money, PlanId};
use domain_billing::SurchargeSchedule;
use domain_contract::Plan;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard contract base value
    pub fn base_value() -> Money {
        Money::new(dec!(1000.00), Currency::BRL)
    }

    /// Consultation surcharge amount
    pub fn consultation_surcharge() -> Money {
        Money::new(dec!(30.00), Currency::BRL)
    }

    /// Surgery surcharge amount
    pub fn surgery_surcharge() -> Money {
        Money::new(dec!(120.00), Currency::BRL)
    }

    /// Age surcharge amount per qualifying dependent
    pub fn age_surcharge() -> Money {
        Money::new(dec!(50.00), Currency::BRL)
    }

    /// A zero BRL amount
    pub fn zero() -> Money {
        Money::zero(Currency::BRL)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for calendar-date test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard emission date (Jun 1, 2024)
    pub fn emission_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// Standard due date one month after emission
    pub fn due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    /// The day before the standard emission date
    pub fn before_emission() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()
    }

    /// Birth date of a dependent aged 70 at the standard emission date
    pub fn birth_date_aged_70() -> NaiveDate {
        NaiveDate::from_ymd_opt(1954, 3, 10).unwrap()
    }

    /// Birth date of a dependent aged exactly 65 at the standard emission date
    pub fn birth_date_aged_65() -> NaiveDate {
        NaiveDate::from_ymd_opt(1959, 6, 1).unwrap()
    }

    /// Birth date of a dependent aged 34 at the standard emission date
    pub fn birth_date_aged_34() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
    }
}

/// Fixture for domain entities
pub struct DomainFixtures;

impl DomainFixtures {
    /// A plan with the standard base value
    pub fn plan() -> Plan {
        Plan::new(PlanId::new(), MoneyFixtures::base_value()).unwrap()
    }

    /// The standard surcharge schedule: consultation 30.00, surgery 120.00,
    /// age 50.00 above 65 years
    pub fn schedule() -> SurchargeSchedule {
        SurchargeSchedule::new(
            MoneyFixtures::consultation_surcharge(),
            MoneyFixtures::surgery_surcharge(),
            MoneyFixtures::age_surcharge(),
            65,
        )
        .unwrap()
    }
}
