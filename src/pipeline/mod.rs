pub mod stage1_answers;
pub mod stage2_score;
pub mod stage3_classify;
pub mod stage4_report;
