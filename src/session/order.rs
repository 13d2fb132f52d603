use crate::models::QuestionRecord;
use rand::seq::SliceRandom;
use rand::Rng;
use std::str::FromStr;

/// 出题顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionOrder {
    /// 按文件中的顺序
    #[default]
    Sequential,
    /// 随机打乱
    Shuffled,
}

impl QuestionOrder {
    /// 按顺序整理题目，随机数源由调用方提供
    pub fn arrange_with<R: Rng + ?Sized>(
        self,
        mut questions: Vec<QuestionRecord>,
        rng: &mut R,
    ) -> Vec<QuestionRecord> {
        if self == QuestionOrder::Shuffled {
            questions.shuffle(rng);
        }
        questions
    }

    /// 使用线程随机数源整理题目
    pub fn arrange(self, questions: Vec<QuestionRecord>) -> Vec<QuestionRecord> {
        self.arrange_with(questions, &mut rand::thread_rng())
    }
}

impl FromStr for QuestionOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(QuestionOrder::Sequential),
            "shuffled" | "random" => Ok(QuestionOrder::Shuffled),
            other => Err(format!("未知的出题顺序: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn questions(n: u32) -> Vec<QuestionRecord> {
        (1..=n)
            .map(|i| QuestionRecord::new(i, format!("Q{i}"), vec!["a".into()], "a", ""))
            .collect()
    }

    #[test]
    fn test_sequential_keeps_order() {
        let arranged = QuestionOrder::Sequential.arrange(questions(5));
        let ordinals: Vec<u32> = arranged.iter().map(|q| q.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let arranged = QuestionOrder::Shuffled.arrange_with(questions(20), &mut rng);

        let mut ordinals: Vec<u32> = arranged.iter().map(|q| q.ordinal()).collect();
        assert_eq!(ordinals.len(), 20);
        ordinals.sort_unstable();
        assert_eq!(ordinals, (1..=20).collect::<Vec<_>>());
    }
}
