use crate::traits::Reading;

/// Readings of one sensor, kept in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingList<T> {
    values: Vec<T>,
}

impl<T: Reading> ReadingList<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn append(&mut self, value: T) {
        self.values.push(value);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Removes the first occurrence of the smallest reading.
    /// Returns `false` if the list was empty.
    pub fn remove_minimum(&mut self) -> bool {
        let Some(first) = self.values.first() else {
            return false;
        };

        let mut min_index = 0;
        let mut min = *first;
        for (index, &value) in self.values.iter().enumerate().skip(1) {
            if value < min {
                min = value;
                min_index = index;
            }
        }

        self.values.remove(min_index);
        true
    }

    /// Arithmetic mean summed in arrival order; `0.0` when empty.
    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.iter().map(|&v| v.into()).sum();
        sum / self.values.len() as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<T: Reading> Default for ReadingList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Reading> FromIterator<T> for ReadingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_arrival_order() {
        let mut list = ReadingList::new();
        list.append(3);
        list.append(1);
        list.append(2);
        assert_eq!(list.as_slice(), &[3, 1, 2]);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_minimum_takes_first_tie() {
        let mut list: ReadingList<i32> = [5, 3, 3, 7].into_iter().collect();
        assert!(list.remove_minimum());
        assert_eq!(list.as_slice(), &[5, 3, 7]);
        assert_eq!(list.iter().filter(|&&v| v == 3).count(), 1);
    }

    #[test]
    fn test_remove_minimum_at_head_and_tail() {
        let mut list: ReadingList<f32> = [1.0, 4.0, 0.5].into_iter().collect();
        assert!(list.remove_minimum());
        assert_eq!(list.as_slice(), &[1.0, 4.0]);
        assert!(list.remove_minimum());
        assert_eq!(list.as_slice(), &[4.0]);
        assert!(list.remove_minimum());
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_minimum_on_empty() {
        let mut list: ReadingList<i32> = ReadingList::new();
        assert!(!list.remove_minimum());
        assert!(list.is_empty());
    }

    #[test]
    fn test_average() {
        let empty: ReadingList<i32> = ReadingList::new();
        assert_eq!(empty.average(), 0.0);

        let list: ReadingList<i32> = [10, 20, 30].into_iter().collect();
        assert_eq!(list.average(), 20.0);

        let list: ReadingList<i32> = [1, 2].into_iter().collect();
        assert_eq!(list.average(), 1.5);
    }

    #[test]
    fn test_average_matches_sequential_sum() {
        let values = [0.1f32, 0.2, 0.3, 1e7, -1e7];
        let list: ReadingList<f32> = values.into_iter().collect();

        let mut sum = 0.0f64;
        for v in values {
            sum += f64::from(v);
        }
        assert_eq!(list.average(), sum / values.len() as f64);
    }
}
