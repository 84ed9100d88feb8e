// ==========================================
// 目標難易度判定エンジン
// ==========================================
// 責務: 目標スコアと目標学習時間から難易度を判定する
// 方式: ルールテーブルを上から順に評価し、最初に一致した
// ルールを採用する。末尾の (0, 0) ルールが全域性を保証する
// ==========================================

use crate::domain::types::GoalDifficulty;
use crate::i18n;

// 判定ルール。追加・並べ替えはこのテーブルだけを触ればよい
struct DifficultyRule {
    min_score: i32,
    min_hours: i32,
    difficulty: GoalDifficulty,
    recommendation_key: &'static str,
}

// 厳しい条件から順に並べる。スコアと時間の両方を満たす
// 最初のルールが一致する
const DIFFICULTY_RULES: [DifficultyRule; 5] = [
    DifficultyRule {
        min_score: 90,
        min_hours: 50,
        difficulty: GoalDifficulty::VeryHard,
        recommendation_key: "difficulty.very_hard.advice",
    },
    DifficultyRule {
        min_score: 80,
        min_hours: 30,
        difficulty: GoalDifficulty::Hard,
        recommendation_key: "difficulty.hard.advice",
    },
    DifficultyRule {
        min_score: 70,
        min_hours: 20,
        difficulty: GoalDifficulty::Medium,
        recommendation_key: "difficulty.medium.advice",
    },
    DifficultyRule {
        min_score: 60,
        min_hours: 10,
        difficulty: GoalDifficulty::Easy,
        recommendation_key: "difficulty.easy.advice",
    },
    DifficultyRule {
        min_score: 0,
        min_hours: 0,
        difficulty: GoalDifficulty::VeryEasy,
        recommendation_key: "difficulty.very_easy.advice",
    },
];

// ==========================================
// DifficultyEngine - 難易度判定エンジン
// ==========================================
pub struct DifficultyEngine {
    // ステートレスエンジン。依存の注入は不要
}

impl DifficultyEngine {
    /// コンストラクタ
    pub fn new() -> Self {
        Self {}
    }

    // 一致する最初のルールを返す。末尾ルールは (0, 0) だが、
    // 負の入力もあり得るため明示的なフォールバックを持つ
    fn rule_for(&self, target_score: i32, target_study_hours: i32) -> &'static DifficultyRule {
        DIFFICULTY_RULES
            .iter()
            .find(|rule| {
                target_score >= rule.min_score && target_study_hours >= rule.min_hours
            })
            .unwrap_or(&DIFFICULTY_RULES[DIFFICULTY_RULES.len() - 1])
    }

    /// 難易度を判定する
    pub fn determine(&self, target_score: i32, target_study_hours: i32) -> GoalDifficulty {
        self.rule_for(target_score, target_study_hours).difficulty
    }

    /// 目標に応じた学習アドバイスを返す（ロケール依存）
    pub fn recommendation(&self, target_score: i32, target_study_hours: i32) -> String {
        i18n::t(self.rule_for(target_score, target_study_hours).recommendation_key)
    }

    /// 判定とアドバイスをまとめて返す
    pub fn analyze(&self, target_score: i32, target_study_hours: i32) -> (GoalDifficulty, String) {
        let rule = self.rule_for(target_score, target_study_hours);
        (rule.difficulty, i18n::t(rule.recommendation_key))
    }
}

impl Default for DifficultyEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_each_tier() {
        let engine = DifficultyEngine::new();
        assert_eq!(engine.determine(90, 50), GoalDifficulty::VeryHard);
        assert_eq!(engine.determine(80, 30), GoalDifficulty::Hard);
        assert_eq!(engine.determine(70, 20), GoalDifficulty::Medium);
        assert_eq!(engine.determine(60, 10), GoalDifficulty::Easy);
        assert_eq!(engine.determine(50, 5), GoalDifficulty::VeryEasy);
    }

    #[test]
    fn test_both_thresholds_required() {
        let engine = DifficultyEngine::new();
        // スコアは VERY_HARD 相当でも時間が足りなければ次のルールへ落ちる
        assert_eq!(engine.determine(90, 49), GoalDifficulty::Hard);
        // スコア95・時間29 → HARD の時間条件も不足、MEDIUM に落ちる
        assert_eq!(engine.determine(95, 29), GoalDifficulty::Medium);
        // 時間は十分でもスコアが低ければ下位の難易度
        assert_eq!(engine.determine(65, 100), GoalDifficulty::Easy);
    }

    #[test]
    fn test_no_upper_rule_matches_falls_to_very_easy() {
        let engine = DifficultyEngine::new();
        assert_eq!(engine.determine(0, 0), GoalDifficulty::VeryEasy);
        assert_eq!(engine.determine(59, 1000), GoalDifficulty::VeryEasy);
        assert_eq!(engine.determine(100, 9), GoalDifficulty::VeryEasy);
        // 負の入力でも落ちない
        assert_eq!(engine.determine(-1, -1), GoalDifficulty::VeryEasy);
    }

    #[test]
    fn test_recommendation_differs_per_tier() {
        let _guard = crate::i18n::LOCALE_TEST_LOCK.lock().unwrap();
        let engine = DifficultyEngine::new();
        let inputs = [(90, 50), (80, 30), (70, 20), (60, 10), (0, 0)];
        let advices: Vec<String> = inputs
            .iter()
            .map(|(score, hours)| engine.recommendation(*score, *hours))
            .collect();
        for advice in &advices {
            assert!(!advice.is_empty());
        }
        // 全難易度でアドバイスが異なること
        for i in 0..advices.len() {
            for j in (i + 1)..advices.len() {
                assert_ne!(advices[i], advices[j]);
            }
        }
    }

    #[test]
    fn test_analyze_combines_tier_and_advice() {
        let _guard = crate::i18n::LOCALE_TEST_LOCK.lock().unwrap();
        let engine = DifficultyEngine::new();
        let (difficulty, advice) = engine.analyze(85, 40);
        assert_eq!(difficulty, GoalDifficulty::Hard);
        assert_eq!(advice, engine.recommendation(85, 40));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // どんな入力でも必ずいずれかの難易度に定まる
            #[test]
            fn prop_determine_is_total(score in -1000i32..1000, hours in -1000i32..20000) {
                let engine = DifficultyEngine::new();
                let _ = engine.determine(score, hours);
            }

            // 同じ入力は常に同じ難易度
            #[test]
            fn prop_determine_is_deterministic(score in 0i32..=100, hours in 0i32..=10000) {
                let engine = DifficultyEngine::new();
                prop_assert_eq!(engine.determine(score, hours), engine.determine(score, hours));
            }

            // スコアと時間を増やしても難易度は下がらない
            #[test]
            fn prop_difficulty_is_monotone(
                score in 0i32..=95,
                hours in 0i32..=9000,
                score_up in 0i32..=5,
                hours_up in 0i32..=1000,
            ) {
                let engine = DifficultyEngine::new();
                let base = engine.determine(score, hours);
                let raised = engine.determine(score + score_up, hours + hours_up);
                prop_assert!(raised >= base);
            }
        }
    }
}
