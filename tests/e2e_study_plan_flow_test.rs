// ==========================================
// 学習計画フロー端到端テスト
// ==========================================
// 責務: ユーザー登録から計画完了・後片付けまでの一連の
// 業務フローを、ファクトリ・ポリシー・ストアを実際に
// 組み合わせて検証する
// ==========================================
// シナリオ:
// 1. ユーザー作成とデフォルトカテゴリ整備
// 2. 試験対策プランの作成（ポリシーチェック込み）
// 3. デフォルト目標の一括作成と進捗更新
// 4. 達成サマリ・完了判定・統計・カスケード削除
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use study_plan_engine::engine::PolicyError;
use study_plan_engine::factory::{
    StudyCategoryFactory, StudyGoalFactory, StudyPlanFactory, UserFactory,
};
use study_plan_engine::repository::{
    InMemoryStudyCategoryRepository, InMemoryStudyGoalRepository, InMemoryStudyPlanRepository,
    InMemoryUserRepository, StudyCategoryCommandRepository, StudyCategoryQueryRepository,
    StudyGoalCommandRepository, StudyGoalQueryRepository, StudyPlanCommandRepository,
    StudyPlanQueryRepository, UserCommandRepository, UserQueryRepository,
};
use study_plan_engine::{
    GoalProgressStatus, PlanPolicyService, StudyCategoryId, StudyPlanStatus, ValidationError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ==========================================
// シナリオ1: 試験対策フロー一式
// ==========================================

/// テスト: ユーザー登録から計画完了までの完全フロー
#[test]
fn test_full_exam_preparation_flow() {
    study_plan_engine::logging::init_test();

    // ストアとファクトリ群を初期化
    let user_repo = InMemoryUserRepository::new();
    let category_repo = InMemoryStudyCategoryRepository::new();
    let plan_repo = Arc::new(InMemoryStudyPlanRepository::new());
    let goal_repo = InMemoryStudyGoalRepository::new();

    let user_factory = UserFactory::new();
    let category_factory = StudyCategoryFactory::new();
    let plan_factory = StudyPlanFactory::new();
    let goal_factory = StudyGoalFactory::new();
    let policy = PlanPolicyService::new(plan_repo.clone());

    let today = date(2024, 7, 1);
    let exam_date = date(2024, 10, 13);

    // Step 1: ユーザー登録（入力は正規化される）
    let user = user_factory
        .create_user("  山田太郎 ", "Taro.Yamada@Example.com")
        .expect("ユーザーの作成に失敗");
    user_repo.save(&user).expect("ユーザーの保存に失敗");

    assert_eq!(user.name(), "山田太郎");
    let found = user_repo
        .find_by_email("taro.yamada@example.com")
        .expect("メール検索に失敗")
        .expect("正規化済みメールで見つからない");
    assert_eq!(found.id(), user.id());

    // Step 2: デフォルトカテゴリ8分野を整備
    let categories = category_factory
        .create_default_categories()
        .expect("デフォルトカテゴリの作成に失敗");
    category_repo
        .save_all(&categories)
        .expect("カテゴリの保存に失敗");

    let ordered = category_repo
        .find_all_ordered()
        .expect("カテゴリ一覧の取得に失敗");
    assert_eq!(ordered.len(), 8);
    assert_eq!(ordered[0].name(), "午前I");
    assert_eq!(ordered[7].name(), "運用管理");
    assert_eq!(
        category_repo
            .find_exam_categories()
            .expect("試験分野の取得に失敗")
            .len(),
        4
    );

    // Step 3: 試験対策プランを作成（重複・上限チェックを通してから保存）
    let plan = plan_factory
        .create_database_specialist_plan(user.id().clone(), exam_date, today)
        .expect("試験対策プランの作成に失敗");

    policy
        .validate_plan_creation(user.id(), plan.start_date(), plan.end_date())
        .expect("期間重複チェックで拒否された");
    policy
        .validate_active_plan_limit(user.id())
        .expect("上限チェックで拒否された");
    plan_repo.save(&plan).expect("計画の保存に失敗");

    assert_eq!(plan.title(), "データベーススペシャリスト合格への道");
    assert_eq!(plan.end_date(), date(2024, 10, 6)); // 試験1週間前
    assert_eq!(plan.duration_days(), 98);
    assert_eq!(plan.total_target_hours(), 196);
    assert_eq!(plan.status(), StudyPlanStatus::Active);

    // Step 4: カテゴリ全分野にデフォルト目標を作成
    let category_ids: Vec<StudyCategoryId> =
        ordered.iter().map(|category| category.id().clone()).collect();
    let goals = goal_factory
        .create_default_database_specialist_goals(plan.id().clone(), &category_ids)
        .expect("デフォルト目標の作成に失敗");
    goal_repo.save_all(&goals).expect("目標の保存に失敗");

    assert_eq!(goals.len(), 8);
    // 午前I（先頭カテゴリ）の目標はスコア70・30時間
    assert_eq!(goals[0].category_id(), &category_ids[0]);
    assert_eq!(goals[0].target_score(), 70);
    assert_eq!(goals[0].target_study_hours(), 30);

    // Step 5: 進捗を記録する（ファクトリ経由の厳格な入口）
    let first = goal_factory
        .update_goal_progress(&goals[0], Some(75), Some(30))
        .expect("進捗更新に失敗");
    goal_repo.save(&first).expect("進捗の保存に失敗");
    assert!(first.is_goal_achieved());
    assert_eq!(first.progress_status(), GoalProgressStatus::Completed);

    let second = goal_factory
        .update_goal_progress(&goals[1], Some(60), Some(20))
        .expect("進捗更新に失敗");
    goal_repo.save(&second).expect("進捗の保存に失敗");
    assert!(!second.is_goal_achieved());
    assert_eq!(second.overall_achievement_rate(), 62.5);

    // 範囲外の進捗入力はファクトリで拒否される
    assert!(matches!(
        goal_factory.update_goal_progress(&goals[2], Some(150), None),
        Err(ValidationError::ProgressUpdateRejected(_))
    ));

    // Step 6: 達成状況を集計する
    let achieved = goal_repo
        .find_achieved_goals_by_study_plan_id(plan.id())
        .expect("達成済み目標の検索に失敗");
    assert_eq!(achieved.len(), 1);
    assert_eq!(achieved[0].id(), first.id());

    let summary = goal_repo
        .achievement_summary_by_plan_id(plan.id())
        .expect("サマリ取得に失敗");
    assert_eq!(summary.goal_count, 8);
    assert_eq!(summary.achieved_count, 1);
    // (100.0 + 62.5 + 0×6) ÷ 8
    assert_eq!(summary.average_achievement_rate, 20.3125);
    assert_eq!(summary.total_target_hours, 245);
    assert_eq!(summary.total_studied_hours, 50);

    // Step 7: 完了判定と完了遷移
    let all_achieved = summary.achieved_count == summary.goal_count;
    // 終了日当日はまだ期間内であり、全目標未達成なので完了できない
    assert!(!policy.is_plan_completable(&plan, date(2024, 10, 6), all_achieved));
    // 終了日を過ぎれば完了できる
    assert!(policy.is_plan_completable(&plan, date(2024, 10, 7), all_achieved));

    let completed = plan.complete().expect("完了遷移に失敗");
    plan_repo.save(&completed).expect("完了の保存に失敗");

    let stats = plan_repo
        .statistics_by_user_id(user.id())
        .expect("統計取得に失敗");
    assert_eq!(stats.total_plans, 1);
    assert_eq!(stats.completed_plans, 1);
    assert_eq!(stats.average_duration_days, 98.0);
    assert_eq!(stats.completion_rate, 100.0);

    // Step 8: 後片付け（目標 → 計画 → ユーザーの順に削除）
    let removed = goal_repo
        .delete_by_study_plan_id(plan.id())
        .expect("目標の一括削除に失敗");
    assert_eq!(removed, 8);
    assert!(goal_repo
        .find_by_study_plan_id(plan.id())
        .expect("検索に失敗")
        .is_empty());

    let removed = plan_repo
        .delete_by_user_id(user.id())
        .expect("計画の一括削除に失敗");
    assert_eq!(removed, 1);
    user_repo.delete(user.id()).expect("ユーザーの削除に失敗");
    assert_eq!(user_repo.count().expect("件数取得に失敗"), 0);
}

// ==========================================
// シナリオ2: ポリシーによる作成拒否と回復
// ==========================================

/// テスト: 重複期間と実施中上限が作成を堰き止め、解消後に通ること
#[test]
fn test_policy_gates_block_and_release() {
    study_plan_engine::logging::init_test();

    let plan_repo = Arc::new(InMemoryStudyPlanRepository::new());
    let user_factory = UserFactory::new();
    let plan_factory = StudyPlanFactory::new();
    let policy = PlanPolicyService::new(plan_repo.clone());

    let today = date(2024, 7, 1);
    let user = user_factory
        .create_test_user("Kenji Sato")
        .expect("テストユーザーの作成に失敗");

    // 1件目: 試験対策プラン（7/1〜10/6）
    let exam_plan = plan_factory
        .create_database_specialist_plan(user.id().clone(), date(2024, 10, 13), today)
        .expect("試験対策プランの作成に失敗");
    plan_repo.save(&exam_plan).expect("保存に失敗");

    // 期間が重なる短期集中プランは拒否される（開始日が今日＝既存期間内）
    let intensive = plan_factory
        .create_intensive_plan(user.id().clone(), "SQL集中特訓", 14, today)
        .expect("短期集中プランの作成に失敗");
    assert!(matches!(
        policy.validate_plan_creation(user.id(), intensive.start_date(), intensive.end_date()),
        Err(PolicyError::Validation(ValidationError::OverlappingPlan { .. }))
    ));

    // 2件目: 隣接する長期プラン（10/7〜翌2/4）は許容
    let long_term = plan_factory
        .create_long_term_plan(
            user.id().clone(),
            "基礎体力づくり",
            "試験後の継続学習",
            date(2024, 10, 7),
            date(2025, 2, 4),
            today,
        )
        .expect("長期プランの作成に失敗");
    policy
        .validate_plan_creation(user.id(), long_term.start_date(), long_term.end_date())
        .expect("隣接期間が誤って拒否された");
    plan_repo.save(&long_term).expect("保存に失敗");

    // 3件目: さらに先の期間の計画で実施中が3件になる
    let third = plan_factory
        .create_plan(
            user.id().clone(),
            "総仕上げ模試対策",
            "",
            date(2025, 2, 5),
            date(2025, 3, 31),
            Some(2),
            today,
        )
        .expect("計画の作成に失敗");
    policy
        .validate_plan_creation(user.id(), third.start_date(), third.end_date())
        .expect("独立期間が誤って拒否された");
    plan_repo.save(&third).expect("保存に失敗");

    // 上限（3件）に達したため4件目は拒否
    assert!(matches!(
        policy.validate_active_plan_limit(user.id()),
        Err(PolicyError::Validation(
            ValidationError::ActivePlanLimitExceeded { max: 3 }
        ))
    ));

    // 長期プランを一時停止すれば枠が空く
    let paused = long_term.pause().expect("一時停止に失敗");
    plan_repo.save(&paused).expect("上書き保存に失敗");
    policy
        .validate_active_plan_limit(user.id())
        .expect("枠が空いたのに拒否された");

    // ただし一時停止中でも期間の占有は続くため、重複チェックは通らない
    assert!(policy
        .validate_plan_creation(user.id(), date(2024, 11, 1), date(2024, 12, 31))
        .is_err());

    assert_eq!(
        plan_repo
            .find_active_by_user_id(user.id())
            .expect("検索に失敗")
            .len(),
        2
    );
}
