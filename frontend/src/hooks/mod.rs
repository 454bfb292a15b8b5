pub mod use_finance;
