//! Social graph resolver: follow/unfollow toggling and counts over the edge set.

use uuid::Uuid;

use crate::models::{SocialConnection, TargetType, UserId};

/// Whether `follower` currently follows `target`.
pub fn is_following(edges: &[SocialConnection], follower: UserId, target: Uuid) -> bool {
    edges
        .iter()
        .any(|e| e.follower_id == follower && e.target_id == target)
}

/// Toggle the (follower, target) edge: remove it when present, insert a
/// fresh one otherwise. Self-inverse, and never leaves a duplicate edge.
/// Returns true when the follower follows the target afterwards.
pub fn toggle_follow(
    edges: &mut Vec<SocialConnection>,
    follower: UserId,
    target: Uuid,
    target_type: TargetType,
) -> bool {
    let before = edges.len();
    edges.retain(|e| !(e.follower_id == follower && e.target_id == target));
    if edges.len() < before {
        return false;
    }
    edges.push(SocialConnection::new(follower, target, target_type));
    true
}

/// Number of followers a target has.
pub fn follower_count(edges: &[SocialConnection], target: Uuid) -> usize {
    edges.iter().filter(|e| e.target_id == target).count()
}

/// Number of targets a user follows.
pub fn following_count(edges: &[SocialConnection], follower: UserId) -> usize {
    edges.iter().filter(|e| e.follower_id == follower).count()
}
