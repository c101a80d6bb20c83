pub trait TruncateWithEllipsis {
    fn truncate_with_ellipsis(self, max_len: usize) -> Self;
}

impl TruncateWithEllipsis for String {
    fn truncate_with_ellipsis(mut self, max_len: usize) -> Self {
        if self.chars().count() > max_len {
            // truncate() takes a byte offset, not a char count
            let boundary = self
                .char_indices()
                .nth(max_len.saturating_sub(1))
                .map_or(self.len(), |(index, _)| index);
            self.truncate(boundary);
            self.push('…');
        }

        self
    }
}
