use crate::Region;

/// One chosen quiz answer and the region it stands for.
#[derive(Clone, Debug, PartialEq)]
pub struct Answer {
	pub label: String,
	pub region: Region,
}

impl Answer {
	pub fn new(label: impl Into<String>, region: Region) -> Self {
		Self {
			label: label.into(),
			region,
		}
	}
}

/// The ordered list of answers chosen so far.
///
/// Order follows the questions answered. It only affects diagnostics, never the
/// combined result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnswerSelection(Vec<Answer>);

impl AnswerSelection {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends the answer to the next question.
	pub fn push(&mut self, answer: Answer) {
		self.0.push(answer);
	}

	/// Goes back one question, returning the removed answer.
	pub fn pop(&mut self) -> Option<Answer> {
		self.0.pop()
	}

	/// Restarts the quiz.
	pub fn clear(&mut self) {
		self.0.clear();
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Answer> {
		self.0.iter()
	}

	pub fn regions(&self) -> impl Iterator<Item = &Region> {
		self.0.iter().map(|answer| &answer.region)
	}
}

impl From<Vec<Answer>> for AnswerSelection {
	fn from(answers: Vec<Answer>) -> Self {
		Self(answers)
	}
}

impl FromIterator<Answer> for AnswerSelection {
	fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl Extend<Answer> for AnswerSelection {
	fn extend<I: IntoIterator<Item = Answer>>(&mut self, iter: I) {
		self.0.extend(iter);
	}
}

impl<'a> IntoIterator for &'a AnswerSelection {
	type Item = &'a Answer;
	type IntoIter = std::slice::Iter<'a, Answer>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
