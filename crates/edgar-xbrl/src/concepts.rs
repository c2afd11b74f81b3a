//! Canonical concept dictionaries.
//!
//! Each statement type maps a fixed set of canonical line-item names to an
//! ordered list of XBRL concept names to try. Companies tag the same
//! line item under different concepts; the resolver walks each list in
//! order and uses the first concept that yields data. Declaration order of
//! the fields is the row order of the assembled statement.

use std::fmt;
use std::str::FromStr;

use edgar_core::EdgarError;

/// An ordered mapping from canonical field name to XBRL concept synonyms.
pub type ConceptDictionary = &'static [(&'static str, &'static [&'static str])];

/// The financial statement to extract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatementType {
    /// Income statement.
    Income,
    /// Balance sheet.
    Balance,
    /// Cash-flow statement.
    CashFlow,
}

impl StatementType {
    /// Returns the lowercase statement selector string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Balance => "balance",
            Self::CashFlow => "cashflow",
        }
    }

    /// Returns the concept dictionary for this statement type.
    #[must_use]
    pub const fn concepts(&self) -> ConceptDictionary {
        match self {
            Self::Income => INCOME_CONCEPTS,
            Self::Balance => BALANCE_CONCEPTS,
            Self::CashFlow => CASHFLOW_CONCEPTS,
        }
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatementType {
    type Err = EdgarError;

    /// Parses a statement selector, failing fast on anything outside
    /// `income`, `balance`, or `cashflow`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "balance" => Ok(Self::Balance),
            "cashflow" => Ok(Self::CashFlow),
            other => Err(EdgarError::InvalidStatement(other.to_string())),
        }
    }
}

/// Income statement concept dictionary.
pub const INCOME_CONCEPTS: ConceptDictionary = &[
    (
        "Revenues",
        &[
            "Revenues",
            "RevenueFromContractWithCustomerExcludingAssessedTax",
            "RevenueFromContractWithCustomerIncludingAssessedTax",
            "SalesRevenueNet",
            "SalesRevenueGoodsNet",
            "SalesRevenueServicesNet",
            "RevenueNet",
        ],
    ),
    (
        "CostOfRevenue",
        &[
            "CostOfRevenue",
            "CostOfGoodsAndServicesSold",
            "CostOfGoodsSold",
            "CostOfGoodsAndServiceExcludingDepreciationDepletionAndAmortization",
        ],
    ),
    ("GrossProfit", &["GrossProfit"]),
    (
        "ResearchAndDevelopmentExpense",
        &[
            "ResearchAndDevelopmentExpense",
            "ResearchAndDevelopmentExpenseExcludingAcquiredInProcessCost",
        ],
    ),
    (
        "SellingGeneralAndAdministrativeExpense",
        &[
            "SellingGeneralAndAdministrativeExpense",
            "SellingAndMarketingExpense",
            "GeneralAndAdministrativeExpense",
        ],
    ),
    ("OperatingExpenses", &["OperatingExpenses", "CostsAndExpenses"]),
    ("OperatingIncomeLoss", &["OperatingIncomeLoss"]),
    ("InterestExpense", &["InterestExpense", "InterestExpenseDebt"]),
    ("InterestIncome", &["InterestIncome", "InvestmentIncomeInterest"]),
    ("IncomeTaxExpenseBenefit", &["IncomeTaxExpenseBenefit"]),
    (
        "NetIncomeLoss",
        &[
            "NetIncomeLoss",
            "ProfitLoss",
            "NetIncomeLossAvailableToCommonStockholdersBasic",
        ],
    ),
    ("EarningsPerShareBasic", &["EarningsPerShareBasic"]),
    ("EarningsPerShareDiluted", &["EarningsPerShareDiluted"]),
    (
        "WeightedAverageNumberOfSharesOutstandingBasic",
        &[
            "WeightedAverageNumberOfSharesOutstandingBasic",
            "CommonStockSharesOutstanding",
        ],
    ),
    (
        "WeightedAverageNumberOfDilutedSharesOutstanding",
        &["WeightedAverageNumberOfDilutedSharesOutstanding"],
    ),
    (
        "DepreciationAndAmortization",
        &[
            "DepreciationDepletionAndAmortization",
            "DepreciationAmortizationAndAccretionNet",
            "Depreciation",
        ],
    ),
    (
        "IncomeBeforeTax",
        &[
            "IncomeLossFromContinuingOperationsBeforeIncomeTaxesExtraordinaryItemsNoncontrollingInterest",
            "IncomeLossFromContinuingOperationsBeforeIncomeTaxesDomestic",
            "IncomeLossFromContinuingOperationsBeforeIncomeTaxesMinorityInterestAndIncomeLossFromEquityMethodInvestments",
        ],
    ),
    (
        "NetIncomeFromContinuingOperations",
        &["IncomeLossFromContinuingOperations"],
    ),
    (
        "OtherIncomeExpenseNet",
        &["NonoperatingIncomeExpense", "OtherNonoperatingIncomeExpense"],
    ),
];

/// Balance sheet concept dictionary.
pub const BALANCE_CONCEPTS: ConceptDictionary = &[
    (
        "CashAndCashEquivalents",
        &[
            "CashAndCashEquivalentsAtCarryingValue",
            "CashCashEquivalentsAndShortTermInvestments",
            "Cash",
        ],
    ),
    (
        "ShortTermInvestments",
        &[
            "ShortTermInvestments",
            "AvailableForSaleSecuritiesCurrent",
            "MarketableSecuritiesCurrent",
        ],
    ),
    (
        "AccountsReceivableNet",
        &[
            "AccountsReceivableNetCurrent",
            "AccountsReceivableNet",
            "ReceivablesNetCurrent",
        ],
    ),
    ("Inventories", &["InventoryNet", "InventoryFinishedGoods"]),
    (
        "OtherCurrentAssets",
        &["OtherAssetsCurrent", "PrepaidExpenseAndOtherAssetsCurrent"],
    ),
    ("TotalCurrentAssets", &["AssetsCurrent"]),
    (
        "PropertyPlantAndEquipmentNet",
        &[
            "PropertyPlantAndEquipmentNet",
            "PropertyPlantAndEquipmentAndFinanceLeaseRightOfUseAssetAfterAccumulatedDepreciationAndAmortization",
        ],
    ),
    ("Goodwill", &["Goodwill"]),
    (
        "IntangibleAssetsNet",
        &[
            "IntangibleAssetsNetExcludingGoodwill",
            "FiniteLivedIntangibleAssetsNet",
        ],
    ),
    (
        "LongTermInvestments",
        &[
            "LongTermInvestments",
            "MarketableSecuritiesNoncurrent",
            "AvailableForSaleSecuritiesNoncurrent",
        ],
    ),
    ("OtherNonCurrentAssets", &["OtherAssetsNoncurrent"]),
    ("TotalNonCurrentAssets", &["AssetsNoncurrent"]),
    ("TotalAssets", &["Assets"]),
    (
        "AccountsPayable",
        &[
            "AccountsPayableCurrent",
            "AccountsPayableAndAccruedLiabilitiesCurrent",
        ],
    ),
    ("ShortTermDebt", &["ShortTermBorrowings", "CommercialPaper"]),
    (
        "DeferredRevenueCurrent",
        &["DeferredRevenueCurrent", "ContractWithCustomerLiabilityCurrent"],
    ),
    (
        "OtherCurrentLiabilities",
        &["OtherLiabilitiesCurrent", "AccruedLiabilitiesCurrent"],
    ),
    ("TotalCurrentLiabilities", &["LiabilitiesCurrent"]),
    (
        "LongTermDebt",
        &[
            "LongTermDebtNoncurrent",
            "LongTermDebt",
            "LongTermDebtAndCapitalLeaseObligations",
        ],
    ),
    ("OtherNonCurrentLiabilities", &["OtherLiabilitiesNoncurrent"]),
    ("TotalNonCurrentLiabilities", &["LiabilitiesNoncurrent"]),
    ("TotalLiabilities", &["Liabilities"]),
    (
        "CommonStockValue",
        &[
            "CommonStocksIncludingAdditionalPaidInCapital",
            "CommonStockValue",
        ],
    ),
    ("RetainedEarnings", &["RetainedEarningsAccumulatedDeficit"]),
    (
        "AccumulatedOtherComprehensiveIncomeLoss",
        &["AccumulatedOtherComprehensiveIncomeLossNetOfTax"],
    ),
    (
        "TotalStockholdersEquity",
        &[
            "StockholdersEquity",
            "StockholdersEquityIncludingPortionAttributableToNoncontrollingInterest",
        ],
    ),
    (
        "TotalLiabilitiesAndStockholdersEquity",
        &["LiabilitiesAndStockholdersEquity"],
    ),
    (
        "CommonSharesOutstanding",
        &[
            "CommonStockSharesOutstanding",
            "EntityCommonStockSharesOutstanding",
        ],
    ),
    ("TreasuryStock", &["TreasuryStockValue"]),
    (
        "AdditionalPaidInCapital",
        &["AdditionalPaidInCapitalCommonStock", "AdditionalPaidInCapital"],
    ),
];

/// Cash-flow statement concept dictionary.
pub const CASHFLOW_CONCEPTS: ConceptDictionary = &[
    ("NetIncomeLoss", &["NetIncomeLoss", "ProfitLoss"]),
    (
        "DepreciationAndAmortization",
        &[
            "DepreciationDepletionAndAmortization",
            "DepreciationAmortizationAndAccretionNet",
            "Depreciation",
        ],
    ),
    (
        "StockBasedCompensation",
        &["ShareBasedCompensation", "StockBasedCompensation"],
    ),
    (
        "DeferredIncomeTax",
        &[
            "DeferredIncomeTaxExpenseBenefit",
            "DeferredIncomeTaxesAndTaxCredits",
        ],
    ),
    (
        "ChangeInAccountsReceivable",
        &["IncreaseDecreaseInAccountsReceivable"],
    ),
    ("ChangeInInventories", &["IncreaseDecreaseInInventories"]),
    (
        "ChangeInAccountsPayable",
        &[
            "IncreaseDecreaseInAccountsPayable",
            "IncreaseDecreaseInAccountsPayableAndAccruedLiabilities",
        ],
    ),
    (
        "OtherOperatingActivities",
        &[
            "OtherOperatingActivitiesCashFlowStatement",
            "OtherNoncashIncomeExpense",
        ],
    ),
    (
        "NetCashFromOperatingActivities",
        &["NetCashProvidedByUsedInOperatingActivities"],
    ),
    (
        "CapitalExpenditures",
        &[
            "PaymentsToAcquirePropertyPlantAndEquipment",
            "PaymentsForCapitalImprovements",
        ],
    ),
    (
        "PurchaseOfInvestments",
        &[
            "PaymentsToAcquireInvestments",
            "PaymentsToAcquireAvailableForSaleSecuritiesDebt",
            "PaymentsToAcquireMarketableSecurities",
        ],
    ),
    (
        "SaleOfInvestments",
        &[
            "ProceedsFromSaleAndMaturityOfMarketableSecurities",
            "ProceedsFromMaturitiesPrepaymentsAndCallsOfAvailableForSaleSecurities",
            "ProceedsFromSaleOfAvailableForSaleSecuritiesDebt",
        ],
    ),
    (
        "Acquisitions",
        &[
            "PaymentsToAcquireBusinessesNetOfCashAcquired",
            "PaymentsToAcquireBusinessesAndInterestInAffiliates",
        ],
    ),
    (
        "OtherInvestingActivities",
        &[
            "PaymentsForProceedsFromOtherInvestingActivities",
            "OtherInvestingActivitiesCashFlowStatement",
        ],
    ),
    (
        "NetCashFromInvestingActivities",
        &["NetCashProvidedByUsedInInvestingActivities"],
    ),
    ("DebtRepayment", &["RepaymentsOfLongTermDebt", "RepaymentsOfDebt"]),
    (
        "DebtIssuance",
        &[
            "ProceedsFromIssuanceOfLongTermDebt",
            "ProceedsFromDebtNetOfIssuanceCosts",
        ],
    ),
    (
        "CommonStockRepurchased",
        &[
            "PaymentsForRepurchaseOfCommonStock",
            "PaymentsForRepurchaseOfEquity",
        ],
    ),
    (
        "DividendsPaid",
        &["PaymentsOfDividendsCommonStock", "PaymentsOfDividends"],
    ),
    (
        "OtherFinancingActivities",
        &[
            "ProceedsFromPaymentsForOtherFinancingActivities",
            "OtherFinancingActivitiesCashFlowStatement",
        ],
    ),
    (
        "NetCashFromFinancingActivities",
        &["NetCashProvidedByUsedInFinancingActivities"],
    ),
    (
        "NetChangeInCash",
        &[
            "CashCashEquivalentsRestrictedCashAndRestrictedCashEquivalentsPeriodIncreaseDecreaseIncludingExchangeRateEffect",
            "CashAndCashEquivalentsPeriodIncreaseDecrease",
        ],
    ),
    (
        "CashAtEndOfPeriod",
        &[
            "CashCashEquivalentsRestrictedCashAndRestrictedCashEquivalents",
            "CashAndCashEquivalentsAtCarryingValue",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_type_round_trip() {
        for statement in [
            StatementType::Income,
            StatementType::Balance,
            StatementType::CashFlow,
        ] {
            let parsed: StatementType = statement.as_str().parse().unwrap();
            assert_eq!(parsed, statement);
        }
    }

    #[test]
    fn test_invalid_statement_type_fails_fast() {
        let err = "invalid".parse::<StatementType>().unwrap_err();
        assert!(matches!(err, EdgarError::InvalidStatement(_)));
        assert!(err.to_string().contains("income"));
    }

    #[test]
    fn test_dictionaries_nonempty() {
        for statement in [
            StatementType::Income,
            StatementType::Balance,
            StatementType::CashFlow,
        ] {
            let dictionary = statement.concepts();
            assert!(!dictionary.is_empty());
            for (field, synonyms) in dictionary {
                assert!(!field.is_empty());
                assert!(!synonyms.is_empty(), "{field} has no synonyms");
            }
        }
    }

    #[test]
    fn test_revenue_synonym_order() {
        let (field, synonyms) = INCOME_CONCEPTS[0];
        assert_eq!(field, "Revenues");
        assert_eq!(synonyms[0], "Revenues");
        assert_eq!(
            synonyms[1],
            "RevenueFromContractWithCustomerExcludingAssessedTax"
        );
    }
}
