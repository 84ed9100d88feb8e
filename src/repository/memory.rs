// ==========================================
// 学習計画管理システム - インメモリストア
// ==========================================
// 責務: ストア契約の参照実装
// 用途: テストと、永続化層を持たない組み込み利用
// 内部: Mutex<HashMap> による保護。ロック汚染はエラーに変換する
// ==========================================

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::domain::category::StudyCategory;
use crate::domain::goal::StudyGoal;
use crate::domain::ids::{StudyCategoryId, StudyGoalId, StudyPlanId, UserId};
use crate::domain::plan::StudyPlan;
use crate::domain::types::StudyPlanStatus;
use crate::domain::user::User;
use crate::repository::category_repo::{
    StudyCategoryCommandRepository, StudyCategoryQueryRepository,
};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::goal_repo::{
    GoalAchievementSummary, StudyGoalCommandRepository, StudyGoalQueryRepository,
};
use crate::repository::plan_repo::{
    StudyPlanCommandRepository, StudyPlanQueryRepository, StudyPlanStatistics,
};
use crate::repository::user_repo::{UserCommandRepository, UserQueryRepository};

// id文字列をキーにした共有マップ
type Store<T> = Mutex<HashMap<String, T>>;

fn lock<T>(store: &Store<T>) -> RepositoryResult<MutexGuard<'_, HashMap<String, T>>> {
    store
        .lock()
        .map_err(|e| RepositoryError::LockError(e.to_string()))
}

// ==========================================
// InMemoryUserRepository
// ==========================================
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Store<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserCommandRepository for InMemoryUserRepository {
    fn save(&self, user: &User) -> RepositoryResult<()> {
        lock(&self.users)?.insert(user.id().as_str().to_string(), user.clone());
        Ok(())
    }

    fn delete(&self, id: &UserId) -> RepositoryResult<()> {
        match lock(&self.users)?.remove(id.as_str()) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound {
                entity: "User".to_string(),
                id: id.as_str().to_string(),
            }),
        }
    }
}

impl UserQueryRepository for InMemoryUserRepository {
    fn find_by_id(&self, id: &UserId) -> RepositoryResult<Option<User>> {
        Ok(lock(&self.users)?.get(id.as_str()).cloned())
    }

    fn find_all(&self) -> RepositoryResult<Vec<User>> {
        let mut users: Vec<User> = lock(&self.users)?.values().cloned().collect();
        users.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
        Ok(users)
    }

    fn exists_by_id(&self, id: &UserId) -> RepositoryResult<bool> {
        Ok(lock(&self.users)?.contains_key(id.as_str()))
    }

    fn count(&self) -> RepositoryResult<u64> {
        Ok(lock(&self.users)?.len() as u64)
    }

    fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        Ok(lock(&self.users)?
            .values()
            .find(|u| u.email() == email)
            .cloned())
    }

    fn find_by_name_containing(&self, name: &str) -> RepositoryResult<Vec<User>> {
        let mut users: Vec<User> = lock(&self.users)?
            .values()
            .filter(|u| u.name().contains(name))
            .cloned()
            .collect();
        users.sort_by(|a, b| {
            a.name()
                .cmp(b.name())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        Ok(users)
    }

    fn find_by_email_domain(&self, domain: &str) -> RepositoryResult<Vec<User>> {
        let mut users: Vec<User> = lock(&self.users)?
            .values()
            .filter(|u| u.email_domain() == Some(domain))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
        Ok(users)
    }
}

// ==========================================
// InMemoryStudyCategoryRepository
// ==========================================
#[derive(Default)]
pub struct InMemoryStudyCategoryRepository {
    categories: Store<StudyCategory>,
}

impl InMemoryStudyCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudyCategoryCommandRepository for InMemoryStudyCategoryRepository {
    fn save(&self, category: &StudyCategory) -> RepositoryResult<()> {
        lock(&self.categories)?.insert(category.id().as_str().to_string(), category.clone());
        Ok(())
    }

    fn delete(&self, id: &StudyCategoryId) -> RepositoryResult<()> {
        match lock(&self.categories)?.remove(id.as_str()) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound {
                entity: "StudyCategory".to_string(),
                id: id.as_str().to_string(),
            }),
        }
    }

    fn update_display_orders(&self, orders: &[(StudyCategoryId, i32)]) -> RepositoryResult<()> {
        let mut categories = lock(&self.categories)?;
        // 全IDの存在を先に確認してから適用する（途中で失敗しない）
        for (id, _) in orders {
            if !categories.contains_key(id.as_str()) {
                return Err(RepositoryError::NotFound {
                    entity: "StudyCategory".to_string(),
                    id: id.as_str().to_string(),
                });
            }
        }
        for (id, order) in orders {
            if let Some(category) = categories.get(id.as_str()) {
                let updated = category.with_display_order(*order);
                categories.insert(id.as_str().to_string(), updated);
            }
        }
        Ok(())
    }
}

impl StudyCategoryQueryRepository for InMemoryStudyCategoryRepository {
    fn find_by_id(&self, id: &StudyCategoryId) -> RepositoryResult<Option<StudyCategory>> {
        Ok(lock(&self.categories)?.get(id.as_str()).cloned())
    }

    fn find_all(&self) -> RepositoryResult<Vec<StudyCategory>> {
        let mut categories: Vec<StudyCategory> =
            lock(&self.categories)?.values().cloned().collect();
        categories.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
        Ok(categories)
    }

    fn exists_by_id(&self, id: &StudyCategoryId) -> RepositoryResult<bool> {
        Ok(lock(&self.categories)?.contains_key(id.as_str()))
    }

    fn count(&self) -> RepositoryResult<u64> {
        Ok(lock(&self.categories)?.len() as u64)
    }

    fn find_all_ordered(&self) -> RepositoryResult<Vec<StudyCategory>> {
        let mut categories: Vec<StudyCategory> =
            lock(&self.categories)?.values().cloned().collect();
        categories.sort_by(|a, b| {
            a.display_order()
                .cmp(&b.display_order())
                .then_with(|| a.name().cmp(b.name()))
        });
        Ok(categories)
    }

    fn find_by_name_containing(&self, name: &str) -> RepositoryResult<Vec<StudyCategory>> {
        let mut categories: Vec<StudyCategory> = lock(&self.categories)?
            .values()
            .filter(|c| c.name().contains(name))
            .cloned()
            .collect();
        categories.sort_by(|a, b| {
            a.display_order()
                .cmp(&b.display_order())
                .then_with(|| a.name().cmp(b.name()))
        });
        Ok(categories)
    }

    fn find_exam_categories(&self) -> RepositoryResult<Vec<StudyCategory>> {
        let mut categories: Vec<StudyCategory> = lock(&self.categories)?
            .values()
            .filter(|c| c.is_exam_category())
            .cloned()
            .collect();
        categories.sort_by(|a, b| {
            a.display_order()
                .cmp(&b.display_order())
                .then_with(|| a.name().cmp(b.name()))
        });
        Ok(categories)
    }

    fn find_practical_categories(&self) -> RepositoryResult<Vec<StudyCategory>> {
        let mut categories: Vec<StudyCategory> = lock(&self.categories)?
            .values()
            .filter(|c| c.is_practical_category())
            .cloned()
            .collect();
        categories.sort_by(|a, b| {
            a.display_order()
                .cmp(&b.display_order())
                .then_with(|| a.name().cmp(b.name()))
        });
        Ok(categories)
    }
}

// ==========================================
// InMemoryStudyPlanRepository
// ==========================================
#[derive(Default)]
pub struct InMemoryStudyPlanRepository {
    plans: Store<StudyPlan>,
}

impl InMemoryStudyPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // 開始日、同日なら id で安定ソート
    fn sort_by_start_date(plans: &mut [StudyPlan]) {
        plans.sort_by(|a, b| {
            a.start_date()
                .cmp(&b.start_date())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
    }
}

impl StudyPlanCommandRepository for InMemoryStudyPlanRepository {
    fn save(&self, plan: &StudyPlan) -> RepositoryResult<()> {
        lock(&self.plans)?.insert(plan.id().as_str().to_string(), plan.clone());
        Ok(())
    }

    fn delete(&self, id: &StudyPlanId) -> RepositoryResult<()> {
        match lock(&self.plans)?.remove(id.as_str()) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound {
                entity: "StudyPlan".to_string(),
                id: id.as_str().to_string(),
            }),
        }
    }

    fn delete_by_user_id(&self, user_id: &UserId) -> RepositoryResult<usize> {
        let mut plans = lock(&self.plans)?;
        let before = plans.len();
        plans.retain(|_, plan| plan.user_id() != user_id);
        Ok(before - plans.len())
    }
}

impl StudyPlanQueryRepository for InMemoryStudyPlanRepository {
    fn find_by_id(&self, id: &StudyPlanId) -> RepositoryResult<Option<StudyPlan>> {
        Ok(lock(&self.plans)?.get(id.as_str()).cloned())
    }

    fn find_all(&self) -> RepositoryResult<Vec<StudyPlan>> {
        let mut plans: Vec<StudyPlan> = lock(&self.plans)?.values().cloned().collect();
        plans.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
        Ok(plans)
    }

    fn exists_by_id(&self, id: &StudyPlanId) -> RepositoryResult<bool> {
        Ok(lock(&self.plans)?.contains_key(id.as_str()))
    }

    fn count(&self) -> RepositoryResult<u64> {
        Ok(lock(&self.plans)?.len() as u64)
    }

    fn find_by_user_id(&self, user_id: &UserId) -> RepositoryResult<Vec<StudyPlan>> {
        let mut plans: Vec<StudyPlan> = lock(&self.plans)?
            .values()
            .filter(|p| p.user_id() == user_id)
            .cloned()
            .collect();
        Self::sort_by_start_date(&mut plans);
        Ok(plans)
    }

    fn find_by_user_id_and_status(
        &self,
        user_id: &UserId,
        status: StudyPlanStatus,
    ) -> RepositoryResult<Vec<StudyPlan>> {
        let mut plans: Vec<StudyPlan> = lock(&self.plans)?
            .values()
            .filter(|p| p.user_id() == user_id && p.status() == status)
            .cloned()
            .collect();
        Self::sort_by_start_date(&mut plans);
        Ok(plans)
    }

    fn find_overlapping_plans(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> RepositoryResult<Vec<StudyPlan>> {
        let mut plans: Vec<StudyPlan> = lock(&self.plans)?
            .values()
            .filter(|p| {
                p.user_id() == user_id
                    && p.start_date() <= end_date
                    && start_date <= p.end_date()
            })
            .cloned()
            .collect();
        Self::sort_by_start_date(&mut plans);
        Ok(plans)
    }

    fn find_active_by_user_id(&self, user_id: &UserId) -> RepositoryResult<Vec<StudyPlan>> {
        self.find_by_user_id_and_status(user_id, StudyPlanStatus::Active)
    }

    fn find_overdue_plans(&self, today: NaiveDate) -> RepositoryResult<Vec<StudyPlan>> {
        let mut plans: Vec<StudyPlan> = lock(&self.plans)?
            .values()
            .filter(|p| p.is_overdue(today))
            .cloned()
            .collect();
        Self::sort_by_start_date(&mut plans);
        Ok(plans)
    }

    fn find_near_deadline_plans(&self, today: NaiveDate) -> RepositoryResult<Vec<StudyPlan>> {
        let mut plans: Vec<StudyPlan> = lock(&self.plans)?
            .values()
            .filter(|p| p.is_near_deadline(today))
            .cloned()
            .collect();
        Self::sort_by_start_date(&mut plans);
        Ok(plans)
    }

    fn statistics_by_user_id(&self, user_id: &UserId) -> RepositoryResult<StudyPlanStatistics> {
        let plans = lock(&self.plans)?;
        let user_plans: Vec<&StudyPlan> =
            plans.values().filter(|p| p.user_id() == user_id).collect();
        if user_plans.is_empty() {
            return Ok(StudyPlanStatistics::empty());
        }

        let total_plans = user_plans.len() as u64;
        let active_plans = user_plans
            .iter()
            .filter(|p| p.status() == StudyPlanStatus::Active)
            .count() as u64;
        let completed_plans = user_plans
            .iter()
            .filter(|p| p.status() == StudyPlanStatus::Completed)
            .count() as u64;
        let total_duration: i64 = user_plans.iter().map(|p| p.duration_days()).sum();

        Ok(StudyPlanStatistics {
            total_plans,
            active_plans,
            completed_plans,
            average_duration_days: total_duration as f64 / total_plans as f64,
            completion_rate: completed_plans as f64 * 100.0 / total_plans as f64,
        })
    }
}

// ==========================================
// InMemoryStudyGoalRepository
// ==========================================
#[derive(Default)]
pub struct InMemoryStudyGoalRepository {
    goals: Store<StudyGoal>,
}

impl InMemoryStudyGoalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudyGoalCommandRepository for InMemoryStudyGoalRepository {
    fn save(&self, goal: &StudyGoal) -> RepositoryResult<()> {
        lock(&self.goals)?.insert(goal.id().as_str().to_string(), goal.clone());
        Ok(())
    }

    fn delete(&self, id: &StudyGoalId) -> RepositoryResult<()> {
        match lock(&self.goals)?.remove(id.as_str()) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound {
                entity: "StudyGoal".to_string(),
                id: id.as_str().to_string(),
            }),
        }
    }

    fn delete_by_study_plan_id(&self, study_plan_id: &StudyPlanId) -> RepositoryResult<usize> {
        let mut goals = lock(&self.goals)?;
        let before = goals.len();
        goals.retain(|_, goal| goal.study_plan_id() != study_plan_id);
        Ok(before - goals.len())
    }
}

impl StudyGoalQueryRepository for InMemoryStudyGoalRepository {
    fn find_by_id(&self, id: &StudyGoalId) -> RepositoryResult<Option<StudyGoal>> {
        Ok(lock(&self.goals)?.get(id.as_str()).cloned())
    }

    fn find_all(&self) -> RepositoryResult<Vec<StudyGoal>> {
        let mut goals: Vec<StudyGoal> = lock(&self.goals)?.values().cloned().collect();
        goals.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
        Ok(goals)
    }

    fn exists_by_id(&self, id: &StudyGoalId) -> RepositoryResult<bool> {
        Ok(lock(&self.goals)?.contains_key(id.as_str()))
    }

    fn count(&self) -> RepositoryResult<u64> {
        Ok(lock(&self.goals)?.len() as u64)
    }

    fn find_by_study_plan_id(
        &self,
        study_plan_id: &StudyPlanId,
    ) -> RepositoryResult<Vec<StudyGoal>> {
        let mut goals: Vec<StudyGoal> = lock(&self.goals)?
            .values()
            .filter(|g| g.study_plan_id() == study_plan_id)
            .cloned()
            .collect();
        goals.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
        Ok(goals)
    }

    fn find_by_study_plan_id_and_category_id(
        &self,
        study_plan_id: &StudyPlanId,
        category_id: &StudyCategoryId,
    ) -> RepositoryResult<Option<StudyGoal>> {
        Ok(lock(&self.goals)?
            .values()
            .find(|g| g.study_plan_id() == study_plan_id && g.category_id() == category_id)
            .cloned())
    }

    fn find_achieved_goals_by_study_plan_id(
        &self,
        study_plan_id: &StudyPlanId,
    ) -> RepositoryResult<Vec<StudyGoal>> {
        let mut goals: Vec<StudyGoal> = lock(&self.goals)?
            .values()
            .filter(|g| g.study_plan_id() == study_plan_id && g.is_goal_achieved())
            .cloned()
            .collect();
        goals.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
        Ok(goals)
    }

    fn achievement_summary_by_plan_id(
        &self,
        study_plan_id: &StudyPlanId,
    ) -> RepositoryResult<GoalAchievementSummary> {
        let goals = lock(&self.goals)?;
        let plan_goals: Vec<&StudyGoal> = goals
            .values()
            .filter(|g| g.study_plan_id() == study_plan_id)
            .collect();
        if plan_goals.is_empty() {
            return Ok(GoalAchievementSummary::empty());
        }

        let goal_count = plan_goals.len() as u64;
        let achieved_count = plan_goals.iter().filter(|g| g.is_goal_achieved()).count() as u64;
        let rate_sum: f64 = plan_goals.iter().map(|g| g.overall_achievement_rate()).sum();
        let total_target_hours: i64 = plan_goals
            .iter()
            .map(|g| i64::from(g.target_study_hours()))
            .sum();
        let total_studied_hours: i64 = plan_goals
            .iter()
            .map(|g| i64::from(g.total_studied_hours()))
            .sum();

        Ok(GoalAchievementSummary {
            goal_count,
            achieved_count,
            average_achievement_rate: rate_sum / goal_count as f64,
            total_target_hours,
            total_studied_hours,
        })
    }
}
