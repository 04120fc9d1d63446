/// One slot in a pagination footer: either a reachable page number or an
/// elision marker standing in for a run of hidden pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(u64),
    Gap,
}

/// Upper bound on rendered slots; windows never exceed five entries plus the
/// gaps around them.
const MAX_VISIBLE: u64 = 5;

/// Compute the page-number window shown in list footers.
///
/// Page one and the last page are always present. Around the current page a
/// three-wide block stays visible and longer runs collapse into gaps, so the
/// footer width stays bounded no matter how many pages exist.
pub fn page_window(current: u64, total: u64) -> Vec<PageSlot> {
    if total <= MAX_VISIBLE {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut slots = vec![PageSlot::Page(1)];
    if current <= 3 {
        for page in 2..=4 {
            slots.push(PageSlot::Page(page));
        }
        slots.push(PageSlot::Gap);
        slots.push(PageSlot::Page(total));
    } else if current >= total - 2 {
        slots.push(PageSlot::Gap);
        for page in (total - 3)..=total {
            slots.push(PageSlot::Page(page));
        }
    } else {
        slots.push(PageSlot::Gap);
        for page in (current - 1)..=(current + 1) {
            slots.push(PageSlot::Page(page));
        }
        slots.push(PageSlot::Gap);
        slots.push(PageSlot::Page(total));
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageSlot::{Gap, Page};

    fn pages(slots: &[PageSlot]) -> Vec<u64> {
        slots
            .iter()
            .filter_map(|slot| match slot {
                Page(n) => Some(*n),
                Gap => None,
            })
            .collect()
    }

    #[test]
    fn few_pages_are_listed_in_full() {
        assert_eq!(
            page_window(2, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(page_window(1, 1), vec![Page(1)]);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn early_pages_collapse_the_tail() {
        for current in 1..=3 {
            assert_eq!(
                page_window(current, 20),
                vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(20)]
            );
        }
    }

    #[test]
    fn late_pages_collapse_the_head() {
        for current in 18..=20 {
            assert_eq!(
                page_window(current, 20),
                vec![Page(1), Gap, Page(17), Page(18), Page(19), Page(20)]
            );
        }
    }

    #[test]
    fn middle_pages_collapse_both_sides() {
        assert_eq!(
            page_window(10, 20),
            vec![Page(1), Gap, Page(9), Page(10), Page(11), Gap, Page(20)]
        );
    }

    #[test]
    fn boundaries_between_shapes() {
        // First middle-shaped window.
        assert_eq!(
            page_window(4, 20),
            vec![Page(1), Gap, Page(3), Page(4), Page(5), Gap, Page(20)]
        );
        // Last middle-shaped window.
        assert_eq!(
            page_window(17, 20),
            vec![Page(1), Gap, Page(16), Page(17), Page(18), Gap, Page(20)]
        );
    }

    #[test]
    fn endpoints_always_visible() {
        for total in [6u64, 7, 12, 100] {
            for current in 1..=total {
                let window = page_window(current, total);
                let nums = pages(&window);
                assert!(nums.contains(&1));
                assert!(nums.contains(&total));
                assert!(nums.contains(&current));
                assert!(nums.len() as u64 <= MAX_VISIBLE);
                assert!(window.len() <= 7);
            }
        }
    }
}
