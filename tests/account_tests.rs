mod common;

use bank_ledger::{
    domain::{Account, DomainError},
    registry::BankRegistry,
};
use rstest::{fixture, rstest};
use rust_decimal::{Decimal, dec};

#[fixture]
fn account() -> Account {
    common::angel()
}

mod properties {
    use super::*;

    #[rstest]
    fn owner_is_the_constructed_name(account: Account) {
        assert_eq!(account.owner(), "Angel");
    }

    #[rstest]
    fn balance_is_exact_and_positive(account: Account) {
        assert_eq!(account.balance(), dec!(10000.12345));
        assert_eq!(account.balance().to_string(), "10000.12345");
        assert!(account.balance() > Decimal::ZERO);
    }

    #[rstest]
    fn accounts_compare_by_owner_and_balance(account: Account) {
        let other = Account::new("Angel", dec!(10000.12345));

        assert_eq!(other, account);
    }

    #[rstest]
    fn accounts_with_different_balances_differ(account: Account) {
        let other = Account::new("Angel", dec!(10000.12346));

        assert_ne!(other, account);
    }

    #[rstest]
    fn accounts_with_different_owners_differ(account: Account) {
        let other = Account::new("Paco", dec!(10000.12345));

        assert_ne!(other, account);
    }

    #[test]
    fn equal_balances_must_share_scale() {
        let one_decimal = Account::new("Angel", dec!(10.0));
        let two_decimals = Account::new("Angel", dec!(10.00));

        assert_eq!(one_decimal.balance(), two_decimals.balance());
        assert_ne!(one_decimal, two_decimals);
    }

    #[rstest]
    fn equality_ignores_bank_affiliation(account: Account) {
        let mut registry = BankRegistry::new();
        let id = registry.create_bank("BBVA");
        let bank = registry.bank_mut(id).unwrap();
        bank.add_account(account);

        let registered = &bank.accounts()[0];
        let unregistered = common::angel();

        assert_eq!(registered.bank(), Some(id));
        assert_eq!(unregistered.bank(), None);
        assert_eq!(*registered, unregistered);
    }

    #[rstest]
    fn new_accounts_have_no_bank(account: Account) {
        assert_eq!(account.bank(), None);
    }

    #[rstest]
    fn setters_replace_owner_and_balance(mut account: Account) {
        account.set_owner("Paco");
        account.set_balance(dec!(120));

        assert_eq!(account, Account::new("Paco", dec!(120)));
    }
}

mod operations {
    use super::*;

    #[rstest]
    fn debit_subtracts_exactly(mut account: Account) {
        account.debit(dec!(1500)).unwrap();

        assert_eq!(account.balance(), dec!(8500.12345));
        assert_eq!(account.balance().to_string(), "8500.12345");
    }

    #[rstest]
    fn credit_adds_exactly(mut account: Account) {
        account.credit(dec!(1500));

        assert_eq!(account.balance(), dec!(11500.12345));
        assert_eq!(account.balance().to_string(), "11500.12345");
    }

    #[rstest]
    fn credit_accepts_negative_amounts(mut account: Account) {
        account.credit(dec!(-0.12345));

        assert_eq!(account.balance(), dec!(10000));
    }

    #[rstest]
    fn debit_of_negative_amount_increases_balance(mut account: Account) {
        account.debit(dec!(-100)).unwrap();

        assert_eq!(account.balance(), dec!(10100.12345));
    }

    #[test]
    fn credit_clamps_at_maximum_balance() {
        let mut account = Account::new("Angel", Decimal::MAX);

        account.credit(dec!(1));

        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[test]
    fn negative_debit_clamps_at_maximum_balance() {
        let mut account = Account::new("Angel", Decimal::MAX);

        account.debit(dec!(-1)).unwrap();

        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[rstest]
    fn repeated_debits_and_credits_do_not_drift(mut account: Account) {
        for _ in 0..1000 {
            account.debit(dec!(0.1)).unwrap();
        }
        for _ in 0..1000 {
            account.credit(dec!(0.1));
        }

        assert_eq!(account.balance(), dec!(10000.12345));
    }
}

mod insufficient_funds {
    use super::*;

    #[rstest]
    fn debit_over_balance_is_rejected(mut account: Account) {
        let result = account.debit(dec!(10001.12345));

        assert_eq!(result, Err(DomainError::InsufficientFunds));
        assert_eq!(account.balance(), dec!(10000.12345));
    }

    #[rstest]
    fn error_message_is_fixed(mut account: Account) {
        let error = account.debit(dec!(10001.12345)).unwrap_err();

        assert_eq!(error.to_string(), "Insufficient funds");
    }

    #[rstest]
    fn debit_of_exact_balance_leaves_zero(mut account: Account) {
        account.debit(dec!(10000.12345)).unwrap();

        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[rstest]
    fn debit_just_over_balance_is_rejected(mut account: Account) {
        let result = account.debit(dec!(10000.12346));

        assert_eq!(result, Err(DomainError::InsufficientFunds));
        assert_eq!(account.balance(), dec!(10000.12345));
    }

    #[test]
    fn debit_on_empty_account_is_rejected() {
        let mut account = Account::new("Angel", Decimal::ZERO);

        assert_eq!(account.debit(dec!(0.00001)), Err(DomainError::InsufficientFunds));
        assert_eq!(account.balance(), Decimal::ZERO);
    }
}
