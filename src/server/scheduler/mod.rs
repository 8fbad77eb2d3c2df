//! Background jobs run on cron schedules.

pub mod cleanup;
