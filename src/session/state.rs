use crate::model::{Role, UserId, UserRecord};
use crate::session::event::{Generation, OperationFamily};
use serde::{Deserialize, Serialize};

/// Where one operation family stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Phase plus the generation of the most recent request in one family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyStatus {
    pub phase: Phase,
    pub generation: Generation,
}

impl FamilyStatus {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}

/// Per-family lifecycle bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationPhases {
    pub login: FamilyStatus,
    pub registration: FamilyStatus,
    pub user_fetch: FamilyStatus,
    pub roles_fetch: FamilyStatus,
}

impl OperationPhases {
    pub fn get(&self, family: OperationFamily) -> &FamilyStatus {
        match family {
            OperationFamily::Login => &self.login,
            OperationFamily::Registration => &self.registration,
            OperationFamily::UserFetch => &self.user_fetch,
            OperationFamily::RolesFetch => &self.roles_fetch,
        }
    }

    pub(crate) fn get_mut(&mut self, family: OperationFamily) -> &mut FamilyStatus {
        match family {
            OperationFamily::Login => &mut self.login,
            OperationFamily::Registration => &mut self.registration,
            OperationFamily::UserFetch => &mut self.user_fetch,
            OperationFamily::RolesFetch => &mut self.roles_fetch,
        }
    }
}

/// Snapshot of the authenticated session.
///
/// Produced only by the session reducer. `loading` and `error` are the fields the
/// views read; `phases` records which family put them there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub loading: bool,
    pub user: Option<UserRecord>,
    pub user_id: Option<UserId>,
    pub error: Option<String>,
    pub roles: Vec<Role>,
    pub phases: OperationPhases,
}

impl SessionState {
    /// True while the most recent request of `family` has not completed.
    pub fn is_loading(&self, family: OperationFamily) -> bool {
        self.phases.get(family).is_loading()
    }

    pub fn phase(&self, family: OperationFamily) -> Phase {
        self.phases.get(family).phase
    }

    /// Display name of the current user's role, as the members page shows it.
    pub fn role_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|user| crate::model::role_name(&self.roles, &user.role))
    }
}
