use std::fmt::{
    self,
    Display,
    Formatter,
};

use colored::Colorize;

use crate::{
    config::Cluster,
    fmt_kv,
    logs::LogColor,
    views::StreakStatus,
};

pub struct PrettyStreakStatus<'a> {
    pub status: &'a StreakStatus,
    pub cluster: Cluster,
}

impl Display for PrettyStreakStatus<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let status = self.status;
        let streak = status.streak_count.to_string().color(LogColor::Highlight);
        let source = if status.account_exists {
            "on-chain"
        } else {
            "no streak account"
        };

        writeln!(f, "{}", fmt_kv!("Wallet", &status.user))?;
        writeln!(f, "{}", fmt_kv!("Network", self.cluster))?;
        writeln!(f, "{}", fmt_kv!("Streak account", &status.streak_address))?;
        writeln!(f, "{}", fmt_kv!("Streak", format!("{streak} ({source})")))?;
        write!(
            f,
            "{}",
            fmt_kv!("Last check-in", status.last_check_in_text())
        )
    }
}

#[cfg(test)]
mod tests {
    use solana_sdk::pubkey::Pubkey;

    use super::*;
    use crate::views::NO_CHECK_INS;

    #[test]
    fn renders_missing_account() {
        colored::control::set_override(false);
        let status = StreakStatus::new(&Pubkey::new_unique(), &Pubkey::new_unique(), None);
        let rendered = PrettyStreakStatus {
            status: &status,
            cluster: Cluster::Devnet,
        }
        .to_string();

        assert!(rendered.contains("Network: Devnet"));
        assert!(rendered.contains("Streak: 0 (no streak account)"));
        assert!(rendered.ends_with(&format!("Last check-in: {NO_CHECK_INS}")));
    }
}
