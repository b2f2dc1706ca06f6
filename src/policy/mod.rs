//! 授权策略
//!
//! 每种资源的读 / 建 / 改 / 删规则集中在这里，服务层只负责
//! 组装 [`Target`] 并根据 [`Decision`] 返回对应的 HTTP 状态。

use crate::models::users::entities::UserRole;
use crate::models::{Owner, OwnershipFilter};

/// 已通过认证的调用者，由 JWT 中间件写入请求扩展
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: i64,
    pub role: UserRole,
}

impl Caller {
    pub fn new(id: i64, role: UserRole) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn owns(&self, owner: Owner) -> bool {
        owner == Owner::User(self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Category,
    Criterion,
    Question,
    Rubric,
    Software,
    Evaluation,
    Score,
}

/// 更新意图，由请求里出现的字段决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateIntent {
    /// 任意字段
    Full,
    /// 只修改所属分类（标准）
    CategoryOnly,
    /// 修改用户角色
    RoleChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Update(UpdateIntent),
    Delete,
}

/// 被操作的记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub owner: Owner,
    /// 通用评分表（编号 0）
    pub shared_template: bool,
    /// 已完成的评估
    pub locked: bool,
}

impl Target {
    pub fn owned_by(owner: Owner) -> Self {
        Self {
            owner,
            shared_template: false,
            locked: false,
        }
    }

    pub fn user(user_id: i64) -> Self {
        Self::owned_by(Owner::User(user_id))
    }

    /// 无所有者的资源，例如分类
    pub fn unowned() -> Self {
        Self::owned_by(Owner::Public)
    }

    pub fn shared_template(mut self, shared: bool) -> Self {
        self.shared_template = shared;
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// 需要登录 → 401
    Unauthenticated,
    /// 身份有效但权限不足 → 403
    Forbidden,
    /// 按"不存在"处理 → 404
    Concealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(Denial),
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

pub fn decide(
    action: Action,
    resource: Resource,
    caller: Option<&Caller>,
    target: &Target,
) -> Decision {
    match authorize(action, resource, caller, target) {
        Ok(()) => Decision::Allow,
        Err(denial) => Decision::Deny(denial),
    }
}

/// [`decide`] 的 `Result` 形式，方便服务层使用 `?` 风格的分支
pub fn authorize(
    action: Action,
    resource: Resource,
    caller: Option<&Caller>,
    target: &Target,
) -> Result<(), Denial> {
    match resource {
        Resource::Category => match action {
            Action::Read => Ok(()),
            _ => admin_only(require(caller)?),
        },

        Resource::Criterion => {
            let c = require(caller)?;
            match action {
                Action::Read => visible(c, target),
                Action::Create => allow_if(c.is_admin() || c.owns(target.owner)),
                Action::Update(intent) => allow_if(
                    c.is_admin()
                        || (c.owns(target.owner) && intent == UpdateIntent::CategoryOnly),
                ),
                Action::Delete => admin_or_owner(c, target),
            }
        }

        // 管理员不能创建问题
        Resource::Question => {
            let c = require(caller)?;
            match action {
                Action::Create => allow_if(c.role == UserRole::Standard && c.owns(target.owner)),
                _ => visible(c, target),
            }
        }

        Resource::Rubric => match action {
            Action::Read if target.shared_template => Ok(()),
            Action::Read => admin_or_owner(require(caller)?, target),
            Action::Create => require(caller).map(|_| ()),
            // 私有评分表只有所有者能修改，管理员也不例外；公共评分表归管理员维护
            Action::Update(_) => {
                let c = require(caller)?;
                let permitted = match target.owner {
                    Owner::Public => c.is_admin(),
                    owner => c.owns(owner),
                };
                if permitted {
                    Ok(())
                } else {
                    Err(Denial::Concealed)
                }
            }
            Action::Delete if target.shared_template => admin_only(require(caller)?),
            Action::Delete => admin_or_owner(require(caller)?, target),
        },

        Resource::Software => match action {
            Action::Create => open_create(caller, target),
            _ => admin_or_owner(require(caller)?, target),
        },

        Resource::Evaluation => {
            let c = require(caller)?;
            match action {
                Action::Update(_) => {
                    admin_or_owner(c, target)?;
                    allow_if(!target.locked)
                }
                _ => admin_or_owner(c, target),
            }
        }

        // 得分记录没有管理员特权
        Resource::Score => match action {
            Action::Create => open_create(caller, target),
            _ => allow_if(require(caller)?.owns(target.owner)),
        },

        Resource::User => match action {
            Action::Create => Ok(()),
            Action::Update(UpdateIntent::RoleChange) | Action::Delete => {
                admin_only(require(caller)?)
            }
            Action::Read | Action::Update(_) => admin_or_owner(require(caller)?, target),
        },
    }
}

/// 列表查询的可见范围
pub fn list_scope(resource: Resource, caller: &Caller) -> Result<OwnershipFilter, Denial> {
    let filter = match resource {
        Resource::Category => OwnershipFilter::All,
        Resource::Score => OwnershipFilter::Owned(caller.id),
        _ if caller.is_admin() => OwnershipFilter::All,
        Resource::User => return Err(Denial::Forbidden),
        Resource::Criterion | Resource::Question | Resource::Rubric => {
            OwnershipFilter::OwnedOrPublic(caller.id)
        }
        Resource::Software | Resource::Evaluation => OwnershipFilter::Owned(caller.id),
    };
    Ok(filter)
}

fn require(caller: Option<&Caller>) -> Result<&Caller, Denial> {
    caller.ok_or(Denial::Unauthenticated)
}

fn allow_if(condition: bool) -> Result<(), Denial> {
    if condition {
        Ok(())
    } else {
        Err(Denial::Forbidden)
    }
}

fn admin_only(caller: &Caller) -> Result<(), Denial> {
    allow_if(caller.is_admin())
}

fn admin_or_owner(caller: &Caller, target: &Target) -> Result<(), Denial> {
    allow_if(caller.is_admin() || caller.owns(target.owner))
}

fn visible(caller: &Caller, target: &Target) -> Result<(), Denial> {
    allow_if(target.owner.is_public() || caller.is_admin() || caller.owns(target.owner))
}

/// 允许匿名创建；已登录的非管理员只能为自己创建
fn open_create(caller: Option<&Caller>, target: &Target) -> Result<(), Denial> {
    match caller {
        None => Ok(()),
        Some(c) => admin_or_owner(c, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: Caller = Caller {
        id: 1,
        role: UserRole::Admin,
    };
    const ALICE: Caller = Caller {
        id: 2,
        role: UserRole::Standard,
    };
    const BOB: Caller = Caller {
        id: 3,
        role: UserRole::Standard,
    };

    const ALL_RESOURCES: [Resource; 8] = [
        Resource::User,
        Resource::Category,
        Resource::Criterion,
        Resource::Question,
        Resource::Rubric,
        Resource::Software,
        Resource::Evaluation,
        Resource::Score,
    ];

    fn allowed(action: Action, resource: Resource, caller: Option<&Caller>, target: Target) -> bool {
        decide(action, resource, caller, &target).is_allowed()
    }

    #[test]
    fn test_public_resources_readable_by_everyone() {
        for caller in [&ADMIN, &ALICE, &BOB] {
            for resource in [Resource::Criterion, Resource::Question] {
                assert!(allowed(Action::Read, resource, Some(caller), Target::unowned()));
            }
        }
        assert!(allowed(Action::Read, Resource::Category, None, Target::unowned()));
        let general = Target::unowned().shared_template(true);
        assert!(allowed(Action::Read, Resource::Rubric, None, general));
        assert!(allowed(Action::Read, Resource::Rubric, Some(&BOB), general));
    }

    #[test]
    fn test_non_admin_cannot_touch_foreign_records() {
        let foreign = Target::user(ALICE.id);
        for resource in ALL_RESOURCES {
            for action in [Action::Update(UpdateIntent::Full), Action::Delete] {
                let decision = decide(action, resource, Some(&BOB), &foreign);
                assert!(
                    !decision.is_allowed(),
                    "{resource:?} {action:?} should be denied"
                );
            }
        }
    }

    #[test]
    fn test_category_writes_are_admin_only() {
        for action in [Action::Create, Action::Update(UpdateIntent::Full), Action::Delete] {
            assert!(allowed(action, Resource::Category, Some(&ADMIN), Target::unowned()));
            assert_eq!(
                decide(action, Resource::Category, Some(&ALICE), &Target::unowned()),
                Decision::Deny(Denial::Forbidden)
            );
            assert_eq!(
                decide(action, Resource::Category, None, &Target::unowned()),
                Decision::Deny(Denial::Unauthenticated)
            );
        }
    }

    #[test]
    fn test_criterion_update_intent() {
        let own = Target::user(ALICE.id);
        let category_only = Action::Update(UpdateIntent::CategoryOnly);
        let full = Action::Update(UpdateIntent::Full);

        assert!(allowed(category_only, Resource::Criterion, Some(&ALICE), own));
        assert!(!allowed(full, Resource::Criterion, Some(&ALICE), own));
        assert!(!allowed(category_only, Resource::Criterion, Some(&BOB), own));
        assert!(allowed(full, Resource::Criterion, Some(&ADMIN), own));
        // 公共标准只有管理员可以修改
        assert!(!allowed(category_only, Resource::Criterion, Some(&ALICE), Target::unowned()));
        assert!(allowed(full, Resource::Criterion, Some(&ADMIN), Target::unowned()));
    }

    #[test]
    fn test_criterion_create_owner_claims() {
        assert!(allowed(Action::Create, Resource::Criterion, Some(&ALICE), Target::user(ALICE.id)));
        assert!(!allowed(Action::Create, Resource::Criterion, Some(&ALICE), Target::unowned()));
        assert!(allowed(Action::Create, Resource::Criterion, Some(&ADMIN), Target::unowned()));
        assert!(!allowed(Action::Create, Resource::Criterion, None, Target::unowned()));
    }

    #[test]
    fn test_question_create_is_standard_only() {
        assert!(allowed(Action::Create, Resource::Question, Some(&ALICE), Target::user(ALICE.id)));
        assert!(!allowed(Action::Create, Resource::Question, Some(&ADMIN), Target::user(ADMIN.id)));
    }

    #[test]
    fn test_rubric_update_mismatch_is_concealed() {
        assert_eq!(
            decide(
                Action::Update(UpdateIntent::Full),
                Resource::Rubric,
                Some(&BOB),
                &Target::user(ALICE.id)
            ),
            Decision::Deny(Denial::Concealed)
        );
        assert!(allowed(
            Action::Update(UpdateIntent::Full),
            Resource::Rubric,
            Some(&ADMIN),
            Target::unowned().shared_template(true)
        ));
    }

    #[test]
    fn test_private_rubric_update_is_owner_only() {
        let update = Action::Update(UpdateIntent::Full);
        let own = Target::user(ALICE.id);
        assert!(allowed(update, Resource::Rubric, Some(&ALICE), own));
        assert_eq!(
            decide(update, Resource::Rubric, Some(&ADMIN), &own),
            Decision::Deny(Denial::Concealed)
        );
        assert_eq!(
            decide(update, Resource::Rubric, Some(&ALICE), &Target::unowned()),
            Decision::Deny(Denial::Concealed)
        );
    }

    #[test]
    fn test_general_rubric_delete_is_admin_only() {
        let general = Target::unowned().shared_template(true);
        assert!(allowed(Action::Delete, Resource::Rubric, Some(&ADMIN), general));
        assert!(!allowed(Action::Delete, Resource::Rubric, Some(&ALICE), general));
        assert!(allowed(Action::Delete, Resource::Rubric, Some(&ALICE), Target::user(ALICE.id)));
    }

    #[test]
    fn test_private_rubric_requires_identity() {
        assert_eq!(
            decide(Action::Read, Resource::Rubric, None, &Target::user(ALICE.id)),
            Decision::Deny(Denial::Unauthenticated)
        );
    }

    #[test]
    fn test_completed_evaluation_is_locked() {
        let done = Target::user(ALICE.id).locked(true);
        let update = Action::Update(UpdateIntent::Full);
        assert_eq!(
            decide(update, Resource::Evaluation, Some(&ALICE), &done),
            Decision::Deny(Denial::Forbidden)
        );
        assert!(!allowed(update, Resource::Evaluation, Some(&ADMIN), done));
        assert!(allowed(Action::Read, Resource::Evaluation, Some(&ALICE), done));
        assert!(allowed(Action::Delete, Resource::Evaluation, Some(&ADMIN), done));
    }

    #[test]
    fn test_score_has_no_admin_override() {
        let alices = Target::user(ALICE.id);
        assert!(allowed(Action::Read, Resource::Score, Some(&ALICE), alices));
        assert!(!allowed(Action::Read, Resource::Score, Some(&ADMIN), alices));
        assert!(!allowed(Action::Delete, Resource::Score, Some(&ADMIN), alices));
    }

    #[test]
    fn test_open_creation() {
        assert!(allowed(Action::Create, Resource::Software, None, Target::user(ALICE.id)));
        assert!(allowed(Action::Create, Resource::Score, None, Target::user(ALICE.id)));
        assert!(!allowed(Action::Create, Resource::Software, Some(&BOB), Target::user(ALICE.id)));
        assert!(allowed(Action::Create, Resource::Software, Some(&ADMIN), Target::user(ALICE.id)));
    }

    #[test]
    fn test_user_rules() {
        let alice = Target::user(ALICE.id);
        assert!(allowed(Action::Create, Resource::User, None, alice));
        assert!(allowed(Action::Read, Resource::User, Some(&ALICE), alice));
        assert!(!allowed(Action::Read, Resource::User, Some(&BOB), alice));
        assert!(allowed(Action::Update(UpdateIntent::Full), Resource::User, Some(&ALICE), alice));
        assert!(!allowed(Action::Update(UpdateIntent::RoleChange), Resource::User, Some(&ALICE), alice));
        assert!(allowed(Action::Update(UpdateIntent::RoleChange), Resource::User, Some(&ADMIN), alice));
        assert!(!allowed(Action::Delete, Resource::User, Some(&ALICE), alice));
    }

    #[test]
    fn test_list_scopes() {
        assert_eq!(list_scope(Resource::Criterion, &ADMIN), Ok(OwnershipFilter::All));
        assert_eq!(
            list_scope(Resource::Criterion, &ALICE),
            Ok(OwnershipFilter::OwnedOrPublic(ALICE.id))
        );
        assert_eq!(
            list_scope(Resource::Software, &ALICE),
            Ok(OwnershipFilter::Owned(ALICE.id))
        );
        assert_eq!(
            list_scope(Resource::Score, &ADMIN),
            Ok(OwnershipFilter::Owned(ADMIN.id))
        );
        assert_eq!(list_scope(Resource::User, &ALICE), Err(Denial::Forbidden));
    }
}
