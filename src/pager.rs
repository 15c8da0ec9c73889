// src/pager.rs

/// Identifies one story load. Responses carry their ticket back so that a
/// response for a superseded load can be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryTicket {
    pub index: usize,
    pub story: Option<String>,
    pub sequence: u64,
}

/// Index-based navigation over the story list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryPager {
    stories: Option<Vec<String>>,
    current_index: usize,
    sequence: u64,
}

impl StoryPager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stories(&self) -> &[String] {
        self.stories.as_deref().unwrap_or_default()
    }

    /// Stories are fetched once; later calls are ignored.
    pub fn set_stories(&mut self, stories: Vec<String>) -> bool {
        if self.stories.is_some() {
            return false;
        }
        self.stories = Some(stories);
        true
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Forget the story list and position. The ticket sequence keeps
    /// counting so responses issued before the reset stay stale.
    pub fn reset(&mut self) {
        self.stories = None;
        self.current_index = 0;
    }

    pub fn len(&self) -> usize {
        self.stories().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories().is_empty()
    }

    /// Moves to `index`. Out-of-range indices leave the pager untouched.
    pub fn load_story(&mut self, index: isize) -> Option<StoryTicket> {
        let index = usize::try_from(index).ok()?;
        let story = self.stories().get(index)?.clone();
        self.current_index = index;
        Some(self.issue(Some(story)))
    }

    pub fn previous(&mut self) -> Option<StoryTicket> {
        self.load_story(self.current_index as isize - 1)
    }

    pub fn next(&mut self) -> Option<StoryTicket> {
        self.load_story(self.current_index as isize + 1)
    }

    /// Ticket for the single-document page, which has no story list.
    pub fn load_document(&mut self) -> StoryTicket {
        self.current_index = 0;
        self.issue(None)
    }

    pub fn is_current(&self, ticket: &StoryTicket) -> bool {
        ticket.sequence == self.sequence && ticket.index == self.current_index
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0 && !self.is_empty()
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index + 1 < self.len()
    }

    fn issue(&mut self, story: Option<String>) -> StoryTicket {
        self.sequence += 1;
        StoryTicket {
            index: self.current_index,
            story,
            sequence: self.sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager() -> StoryPager {
        let mut pager = StoryPager::new();
        pager.set_stories(vec![
            "story_a".to_string(),
            "story_b".to_string(),
            "story_c".to_string(),
        ]);
        pager
    }

    #[test]
    fn test_load_story_in_range() {
        let mut pager = pager();
        let ticket = pager.load_story(2).unwrap();
        assert_eq!(ticket.index, 2);
        assert_eq!(ticket.story.as_deref(), Some("story_c"));
        assert_eq!(pager.current_index(), 2);
        assert_eq!(pager.stories()[pager.current_index()], "story_c");
    }

    #[test]
    fn test_load_story_out_of_range_is_noop() {
        let mut pager = pager();
        pager.load_story(1).unwrap();
        let before = pager.clone();

        assert!(pager.load_story(-1).is_none());
        assert!(pager.load_story(3).is_none());
        assert!(pager.load_story(100).is_none());
        assert_eq!(pager, before);
    }

    #[test]
    fn test_previous_and_next() {
        let mut pager = pager();
        pager.load_story(0).unwrap();
        assert!(pager.previous().is_none());
        assert_eq!(pager.current_index(), 0);

        assert_eq!(pager.next().unwrap().index, 1);
        assert_eq!(pager.next().unwrap().index, 2);
        assert!(pager.next().is_none());
        assert_eq!(pager.current_index(), 2);
        assert_eq!(pager.previous().unwrap().index, 1);
    }

    #[test]
    fn test_stale_tickets_are_not_current() {
        let mut pager = pager();
        let first = pager.load_story(0).unwrap();
        let second = pager.next().unwrap();
        assert!(!pager.is_current(&first));
        assert!(pager.is_current(&second));

        // Reloading the same index also supersedes the older request.
        let third = pager.load_story(1).unwrap();
        assert!(!pager.is_current(&second));
        assert!(pager.is_current(&third));
    }

    #[test]
    fn test_empty_story_list() {
        let mut pager = StoryPager::new();
        assert!(pager.load_story(0).is_none());
        pager.set_stories(Vec::new());
        assert!(pager.load_story(0).is_none());
        assert!(!pager.can_go_next());
        assert!(!pager.can_go_previous());
    }

    #[test]
    fn test_stories_are_set_once() {
        let mut pager = pager();
        assert!(!pager.set_stories(vec!["other".to_string()]));
        assert_eq!(pager.len(), 3);
    }

    #[test]
    fn test_reset_keeps_old_tickets_stale() {
        let mut pager = pager();
        let old = pager.load_story(0).unwrap();
        pager.reset();
        assert!(pager.is_empty());
        assert_eq!(pager.current_index(), 0);

        pager.set_stories(vec!["story_x".to_string()]);
        let fresh = pager.load_story(0).unwrap();
        assert_eq!(fresh.index, old.index);
        assert!(!pager.is_current(&old));
        assert!(pager.is_current(&fresh));
    }

    #[test]
    fn test_document_ticket() {
        let mut pager = StoryPager::new();
        let ticket = pager.load_document();
        assert!(ticket.story.is_none());
        assert!(pager.is_current(&ticket));
        let newer = pager.load_document();
        assert!(!pager.is_current(&ticket));
        assert!(pager.is_current(&newer));
    }
}
