//! Balance models

/// Smallest units per whole native token
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Display unit suffix used next to balances
pub const NATIVE_UNIT: &str = "SOL";

/// Result of a balance query
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceResult {
    pub lamports: u64,
    pub balance: f64,
}

impl BalanceResult {
    pub fn from_lamports(lamports: u64) -> Self {
        Self {
            lamports,
            balance: lamports as f64 / LAMPORTS_PER_SOL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamports_conversion() {
        let result = BalanceResult::from_lamports(1_500_000_000);
        assert_eq!(result.balance, 1.5);

        let result = BalanceResult::from_lamports(0);
        assert_eq!(result.balance, 0.0);
    }
}
