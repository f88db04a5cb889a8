use serde::{Deserialize, Serialize};

use crate::constants::{GUEST_USER_ID, GUEST_USER_NAME};
use crate::progress::ProgressStore;
use crate::srs::streak::raise_best_streak;
use crate::store::{self, keys, Persistence, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub daily_goal: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub last_active: i64,
}

impl User {
    /// Profile created on first launch: today counts as day one.
    pub fn guest(daily_goal: u32, now_ms: i64) -> Self {
        Self {
            id: GUEST_USER_ID.to_string(),
            name: GUEST_USER_NAME.to_string(),
            daily_goal,
            current_streak: 1,
            best_streak: 1,
            last_active: now_ms,
        }
    }
}

/// 部分更新：仅覆盖提供的字段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub daily_goal: Option<u32>,
    pub current_streak: Option<u32>,
    pub best_streak: Option<u32>,
    pub last_active: Option<i64>,
}

impl UserUpdate {
    fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(daily_goal) = self.daily_goal {
            user.daily_goal = daily_goal;
        }
        if let Some(current_streak) = self.current_streak {
            user.current_streak = current_streak;
        }
        if let Some(best_streak) = self.best_streak {
            user.best_streak = best_streak;
        }
        if let Some(last_active) = self.last_active {
            user.last_active = last_active;
        }
    }
}

impl<P: Persistence> ProgressStore<P> {
    pub fn update_user(&mut self, update: UserUpdate) -> Result<&User, StoreError> {
        let mut user = self.user.clone();
        update.apply_to(&mut user);
        raise_best_streak(&mut user);
        store::save_value(&mut self.backend, keys::USER, &user)?;
        self.user = user;
        tracing::debug!(
            current_streak = self.user.current_streak,
            best_streak = self.user.best_streak,
            "User profile updated"
        );
        Ok(&self.user)
    }

    pub(crate) fn persist_user(&mut self) -> Result<(), StoreError> {
        store::save_value(&mut self.backend, keys::USER, &self.user)
    }
}
