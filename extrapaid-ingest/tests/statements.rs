use extrapaid_ingest::{parse_statement, Bank, ParseOptions};

const SBI_STATEMENT: &str = "\
SBI Card Statement
Statement Date : 20/09/2025          Payment Due Date : 10/10/2025
Date        Transaction Details                     Amount (Rs.)
02/09/2025  AMAZON *Mktplace BANGALORE              1,234.56 D
05/09/2025  AMAZON *Mktplace BANGALORE              1,234.56 DR
06/09/2025  PAYMENT RECEIVED - THANK YOU           15,000.00 CR
08/09/2025  LATE PAYMENT FEE                          750.00 DR
08/09/2025  IGST @ 18% ON LATE PAYMENT FEE            135.00 DR
08/09/2025  IGST @ 18% ON LATE PAYMENT FEE            135.00 DR
Page 1 of 1
";

const IDFC_STATEMENT: &str = "\
IDFC FIRST Bank Credit Card
Transaction Date  Details                          Amount
03-09-2025  SWIGGY BANGALORE            Dr  420.00
04-09-2025  CROSS CURRENCY MARKUP FEE   Dr  35.40
11-09-2025  AUTOPAY PAYMENT             Cr  5,000.00
";

#[test]
fn sbi_statement_rows_in_order_with_duplicates() {
    let out = parse_statement(SBI_STATEMENT, Some(Bank::Sbi), &ParseOptions::default()).unwrap();
    assert!(!out.used_fallback);

    let descs: Vec<_> = out.transactions.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(
        descs,
        vec![
            "AMAZON *Mktplace BANGALORE",
            "PAYMENT RECEIVED - THANK YOU",
            "LATE PAYMENT FEE",
            "IGST @ 18% ON LATE PAYMENT FEE",
            "IGST @ 18% ON LATE PAYMENT FEE",
        ]
    );
    assert_eq!(out.transactions[1].amount, Some(15_000.0));
    assert!(out.transactions.iter().filter(|t| t.amount.unwrap() < 0.0).count() == 4);
}

#[test]
fn idfc_statement() {
    let out = parse_statement(IDFC_STATEMENT, Some(Bank::IdfcFirst), &ParseOptions::default()).unwrap();
    assert_eq!(out.parser, "IDFC FIRST");
    let amounts: Vec<_> = out.transactions.iter().map(|t| t.amount).collect();
    assert_eq!(amounts, vec![Some(-420.0), Some(-35.4), Some(5000.0)]);
}

#[test]
fn every_bank_signs_debits_and_credits() {
    let rows = [
        (Bank::Sbi, "01/09/2025 SHOP 1,234.56 DR", "02/09/2025 SHOP 1,234.56 CR"),
        (Bank::Axis, "01-09-2025 SHOP 1,234.56 dr", "02/09/2025 SHOP 1,234.56 cr"),
        (Bank::Kotak, "01/09/2025 SHOP 1,234.56DR", "02-09-2025 SHOP 1,234.56CR"),
        (Bank::IdfcFirst, "01-09-2025 SHOP DR 1,234.56", "02-09-2025 SHOP cr 1,234.56"),
    ];
    for (bank, debit, credit) in rows {
        let opts = ParseOptions::default();
        let d = parse_statement(debit, Some(bank), &opts).unwrap();
        let c = parse_statement(credit, Some(bank), &opts).unwrap();
        assert!(!d.used_fallback && !c.used_fallback, "{bank}");
        assert_eq!(d.transactions.len(), 1, "{bank}");
        assert_eq!(d.transactions[0].amount, Some(-1234.56), "{bank}");
        assert_eq!(c.transactions[0].amount, Some(1234.56), "{bank}");
        assert_eq!(d.transactions[0].description, "SHOP", "{bank}");
    }
}

#[test]
fn wrong_bank_falls_back_to_generic() {
    let out = parse_statement(IDFC_STATEMENT, Some(Bank::Sbi), &ParseOptions::default()).unwrap();
    assert!(out.used_fallback);
    assert_eq!(out.transactions.len(), 3);
    assert_eq!(out.transactions[0].amount, Some(-420.0));
    assert_eq!(out.transactions[2].amount, Some(5000.0));
}

#[test]
fn fallback_keeps_decimals_of_glued_amounts() {
    let out = parse_statement("12-09-2025 SHOP 1,234.56DR\n", Some(Bank::Sbi), &ParseOptions::default())
        .unwrap();
    assert!(out.used_fallback);
    assert_eq!(out.transactions.len(), 1);
    assert_eq!(out.transactions[0].amount, Some(-1234.56));

    let out = parse_statement("12-09-2025 SHOP Dr 345.50INR\n", Some(Bank::IdfcFirst), &ParseOptions::default())
        .unwrap();
    assert!(!out.used_fallback);
    assert_eq!(out.transactions[0].amount, Some(-345.5));
}
