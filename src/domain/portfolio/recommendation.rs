//! Model portfolio allocation and suggested investments per risk profile.

use serde::Serialize;

use crate::domain::assessment::RiskProfile;
use crate::domain::foundation::Percentage;

/// Share of the portfolio assigned to an asset category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub category: &'static str,
    pub percentage: Percentage,
}

/// A concrete investment vehicle suggested for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvestmentDescriptor {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub risk_level: &'static str,
    pub expected_return: &'static str,
}

/// Allocation table and suggested investments for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationSet {
    pub allocations: &'static [Allocation],
    pub specific_investments: &'static [InvestmentDescriptor],
}

impl RecommendationSet {
    /// Sum of all allocation percentages (100 for every shipped profile).
    pub fn total_allocation(&self) -> u32 {
        self.allocations
            .iter()
            .map(|a| u32::from(a.percentage.value()))
            .sum()
    }
}

const fn alloc(category: &'static str, percentage: u8) -> Allocation {
    Allocation {
        category,
        percentage: Percentage::new(percentage),
    }
}

const fn investment(
    name: &'static str,
    kind: &'static str,
    description: &'static str,
    risk_level: &'static str,
    expected_return: &'static str,
) -> InvestmentDescriptor {
    InvestmentDescriptor {
        name,
        kind,
        description,
        risk_level,
        expected_return,
    }
}

static NO_RISK: RecommendationSet = RecommendationSet {
    allocations: &[
        alloc("High-yield Savings", 50),
        alloc("Certificates of Deposit", 30),
        alloc("Treasury Bills", 20),
        alloc("Stocks", 0),
        alloc("Alternative Investments", 0),
    ],
    specific_investments: &[
        investment(
            "High-Yield Savings Account",
            "Cash Equivalent",
            "FDIC-insured savings accounts with higher interest rates than standard accounts.",
            "Very Low",
            "1-3%",
        ),
        investment(
            "Certificates of Deposit (CDs)",
            "Cash Equivalent",
            "Time deposits with fixed terms and interest rates, typically FDIC-insured.",
            "Very Low",
            "2-4%",
        ),
        investment(
            "Short-Term Treasury Bills",
            "Government Security",
            "Short-term debt obligations backed by the U.S. government with maturities under one year.",
            "Very Low",
            "1.5-3.5%",
        ),
    ],
};

static LOW_RISK: RecommendationSet = RecommendationSet {
    allocations: &[
        alloc("Cash & Equivalents", 25),
        alloc("Bonds", 60),
        alloc("Stocks", 15),
        alloc("Real Estate", 0),
        alloc("Alternative Investments", 0),
    ],
    specific_investments: &[
        investment(
            "Short-Term Bond ETFs",
            "Fixed Income",
            "ETFs that invest in high-quality bonds with short maturities, reducing interest rate risk.",
            "Low",
            "2-4%",
        ),
        investment(
            "Municipal Bond Funds",
            "Fixed Income",
            "Funds that invest in tax-exempt bonds issued by state and local governments.",
            "Low",
            "2-4%",
        ),
        investment(
            "Conservative Allocation Mutual Funds",
            "Mixed Asset",
            "Mutual funds that maintain a higher percentage of bonds and a lower percentage of stocks.",
            "Low to Moderate",
            "3-5%",
        ),
        investment(
            "Treasury Inflation-Protected Securities (TIPS)",
            "Government Security",
            "U.S. government bonds that adjust with inflation to protect purchasing power.",
            "Low",
            "2-3%",
        ),
    ],
};

static MEDIUM_RISK: RecommendationSet = RecommendationSet {
    allocations: &[
        alloc("Cash & Equivalents", 10),
        alloc("Bonds", 40),
        alloc("Stocks", 40),
        alloc("Real Estate", 10),
        alloc("Alternative Investments", 0),
    ],
    specific_investments: &[
        investment(
            "Balanced Mutual Funds",
            "Mixed Asset",
            "Funds that maintain a roughly equal mix of stocks and bonds for balance between growth and income.",
            "Moderate",
            "4-6%",
        ),
        investment(
            "Dividend Stock ETFs",
            "Equity",
            "ETFs focused on companies with strong dividend payment histories, providing income and growth potential.",
            "Moderate",
            "5-7%",
        ),
        investment(
            "Blue-Chip Stocks",
            "Equity",
            "Shares of well-established companies with stable earnings and a history of reliable performance.",
            "Moderate",
            "6-8%",
        ),
        investment(
            "Real Estate Investment Trusts (REITs)",
            "Real Estate",
            "Companies that own, operate, or finance income-producing real estate across various sectors.",
            "Moderate",
            "5-8%",
        ),
    ],
};

static HIGH_RISK: RecommendationSet = RecommendationSet {
    allocations: &[
        alloc("Cash & Equivalents", 5),
        alloc("Bonds", 15),
        alloc("Stocks", 65),
        alloc("Real Estate", 10),
        alloc("Alternative Investments", 5),
    ],
    specific_investments: &[
        investment(
            "Growth Stock ETFs",
            "Equity",
            "ETFs focused on companies expected to grow earnings at a faster rate than the market average.",
            "High",
            "8-12%",
        ),
        investment(
            "Mid-Cap and Small-Cap Funds",
            "Equity",
            "Funds investing in medium and smaller-sized companies with higher growth potential and higher risk.",
            "High",
            "8-12%",
        ),
        investment(
            "International and Emerging Market Funds",
            "Equity",
            "Funds that invest in foreign markets, including developing economies with high growth potential.",
            "High",
            "7-14%",
        ),
        investment(
            "Sector-Specific ETFs (Technology, Healthcare)",
            "Equity",
            "ETFs that focus on specific industry sectors with strong growth outlooks.",
            "High",
            "9-15%",
        ),
    ],
};

static VERY_HIGH_RISK: RecommendationSet = RecommendationSet {
    allocations: &[
        alloc("Cash & Equivalents", 5),
        alloc("Bonds", 5),
        alloc("Stocks", 65),
        alloc("Real Estate", 10),
        alloc("Alternative Investments", 15),
    ],
    specific_investments: &[
        investment(
            "Aggressive Growth Stocks",
            "Equity",
            "Individual stocks of companies with high growth potential but potentially higher volatility.",
            "Very High",
            "12-18%",
        ),
        investment(
            "Leveraged ETFs",
            "Equity",
            "ETFs that use financial derivatives to amplify the returns of an underlying index.",
            "Very High",
            "15-25% (with higher risk of losses)",
        ),
        investment(
            "Emerging Market Small-Cap Funds",
            "Equity",
            "Funds focusing on smaller companies in developing economies, combining small-cap and emerging market risks and rewards.",
            "Very High",
            "10-20%",
        ),
        investment(
            "Private Equity Funds",
            "Alternative",
            "Investments in privately-held companies not available on public exchanges.",
            "Very High",
            "15-25%",
        ),
        investment(
            "Cryptocurrency ETFs",
            "Alternative",
            "Regulated ETFs that track the performance of digital currencies like Bitcoin.",
            "Extremely High",
            "Highly variable (could exceed 25% or result in significant losses)",
        ),
    ],
};

/// Recommendations for a profile.
pub fn recommend(profile: RiskProfile) -> &'static RecommendationSet {
    match profile {
        RiskProfile::No => &NO_RISK,
        RiskProfile::Low => &LOW_RISK,
        RiskProfile::Medium => &MEDIUM_RISK,
        RiskProfile::High => &HIGH_RISK,
        RiskProfile::VeryHigh => &VERY_HIGH_RISK,
    }
}
