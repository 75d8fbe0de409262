use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlanDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in the smallest currency unit.
    #[serde(default)]
    pub price_cents: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_interval")]
    pub interval: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_interval() -> String {
    "month".to_string()
}

impl PlanDto {
    pub fn is_free(&self) -> bool {
        self.price_cents == 0
    }

    /// Price formatted for display, e.g. `4.99 EUR / month`.
    pub fn price_label(&self) -> String {
        if self.is_free() {
            return "Free".to_string();
        }

        format!(
            "{}.{:02} {} / {}",
            self.price_cents / 100,
            self.price_cents % 100,
            self.currency,
            self.interval
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SubscriptionDto {
    #[serde(default)]
    pub plan_id: Option<String>,
    #[serde(default)]
    pub plan_name: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub current_period_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cancel_at_period_end: bool,
}

impl SubscriptionDto {
    pub fn is_active(&self) -> bool {
        matches!(self.status.as_str(), "active" | "trialing")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CheckoutRequestDto {
    pub plan_id: String,
}

/// Payment page the browser is sent to after requesting a checkout.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CheckoutResponseDto {
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QuotaItemDto {
    pub name: String,
    #[serde(default)]
    pub used: u64,
    /// `None` means unlimited.
    #[serde(default)]
    pub limit: Option<u64>,
}

impl QuotaItemDto {
    /// Usage as a percentage of the limit, capped at 100.
    pub fn percent(&self) -> Option<u64> {
        self.limit.map(|limit| {
            if limit == 0 {
                100
            } else {
                (self.used * 100 / limit).min(100)
            }
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct QuotaDto {
    #[serde(default)]
    pub items: Vec<QuotaItemDto>,
}
