//! Read-time reconstruction of reply trees from a flat comment list

use std::collections::{HashMap, HashSet};

use crate::entities::Comment;
use crate::value_objects::Snowflake;

/// Group comments into reply trees, building each node with `make`.
///
/// `make` receives a comment together with its already built replies, so
/// nodes are assembled bottom-up without recursion. Input order is preserved
/// among siblings, so an oldest-first list yields oldest-first threads. A
/// reply whose parent is not in `comments` (deleted, or from another post)
/// becomes a root.
pub fn build_threads<T, F>(comments: Vec<Comment>, mut make: F) -> Vec<T>
where
    F: FnMut(Comment, Vec<T>) -> T,
{
    let present: HashSet<Snowflake> = comments.iter().map(|c| c.id).collect();

    let mut children: HashMap<Snowflake, Vec<Snowflake>> = HashMap::new();
    let mut roots = Vec::new();
    let mut pending: HashMap<Snowflake, Comment> = HashMap::with_capacity(comments.len());
    for comment in comments {
        match comment.parent_id {
            Some(parent) if parent != comment.id && present.contains(&parent) => {
                children.entry(parent).or_default().push(comment.id);
            }
            _ => roots.push(comment.id),
        }
        pending.insert(comment.id, comment);
    }

    // Breadth-first order puts every reply after its parent
    let mut order = roots.clone();
    let mut next = 0;
    while let Some(&id) = order.get(next) {
        if let Some(replies) = children.get(&id) {
            order.extend(replies.iter().copied());
        }
        next += 1;
    }

    let mut built: HashMap<Snowflake, T> = HashMap::with_capacity(order.len());
    for id in order.into_iter().rev() {
        let Some(comment) = pending.remove(&id) else {
            continue;
        };
        let replies = children
            .remove(&id)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|reply| built.remove(&reply))
            .collect();
        built.insert(id, make(comment, replies));
    }

    roots
        .into_iter()
        .filter_map(|id| built.remove(&id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Node {
        id: i64,
        replies: Vec<Node>,
    }

    impl Node {
        fn size(&self) -> usize {
            1 + self.replies.iter().map(Node::size).sum::<usize>()
        }
    }

    fn comment(id: i64, parent: Option<i64>) -> Comment {
        Comment::new(
            Snowflake::new(id),
            Snowflake::new(100),
            Some(Snowflake::new(1)),
            parent.map(Snowflake::new),
            format!("comment {id}"),
        )
    }

    fn nodes(comments: Vec<Comment>) -> Vec<Node> {
        build_threads(comments, |c, replies| Node {
            id: c.id.into_inner(),
            replies,
        })
    }

    #[test]
    fn test_flat_list_stays_flat() {
        let threads = nodes(vec![comment(1, None), comment(2, None)]);
        assert_eq!(threads.len(), 2);
        assert!(threads.iter().all(|t| t.replies.is_empty()));
    }

    #[test]
    fn test_nested_replies() {
        // 1
        // ├─ 2
        // │  └─ 4
        // └─ 3
        // 5
        let threads = nodes(vec![
            comment(1, None),
            comment(2, Some(1)),
            comment(3, Some(1)),
            comment(4, Some(2)),
            comment(5, None),
        ]);

        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].size(), 4);
        assert_eq!(threads[0].replies[0].id, 2);
        assert_eq!(threads[0].replies[1].id, 3);
        assert_eq!(threads[0].replies[0].replies[0].id, 4);
        assert_eq!(threads[1].size(), 1);
    }

    #[test]
    fn test_orphaned_reply_is_promoted() {
        let threads = nodes(vec![comment(2, Some(1)), comment(3, Some(2))]);
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].id, 2);
        assert_eq!(threads[0].replies[0].id, 3);
    }

    #[test]
    fn test_self_parent_does_not_vanish() {
        let threads = nodes(vec![comment(7, Some(7))]);
        assert_eq!(threads.len(), 1);
    }

    #[test]
    fn test_long_reply_chain_builds_without_recursion() {
        let chain: Vec<Comment> = (1..=100_000)
            .map(|id| comment(id, (id > 1).then_some(id - 1)))
            .collect();

        // Fold each subtree to its height so the result itself stays flat
        let heights = build_threads(chain, |_, replies: Vec<usize>| {
            1 + replies.into_iter().max().unwrap_or(0)
        });
        assert_eq!(heights, vec![100_000]);
    }
}
