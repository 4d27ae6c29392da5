//! Integration tests for the social graph: toggling edges and counts.

use local_league_web::{
    follower_count, following_count, is_following, toggle_follow, SocialConnection, TargetType,
};
use uuid::Uuid;

#[test]
fn toggle_follows_then_unfollows() {
    let mut edges: Vec<SocialConnection> = Vec::new();
    let user = Uuid::new_v4();
    let team = Uuid::new_v4();

    assert!(toggle_follow(&mut edges, user, team, TargetType::Team));
    assert!(is_following(&edges, user, team));
    assert_eq!(edges.len(), 1);

    assert!(!toggle_follow(&mut edges, user, team, TargetType::Team));
    assert!(!is_following(&edges, user, team));
    assert!(edges.is_empty());
}

#[test]
fn toggle_is_self_inverse() {
    let mut edges: Vec<SocialConnection> = Vec::new();
    let user = Uuid::new_v4();
    let target = Uuid::new_v4();

    for _ in 0..4 {
        toggle_follow(&mut edges, user, target, TargetType::User);
        toggle_follow(&mut edges, user, target, TargetType::User);
        assert!(edges.is_empty());
    }
}

#[test]
fn toggle_never_duplicates_an_edge() {
    let mut edges: Vec<SocialConnection> = Vec::new();
    let user = Uuid::new_v4();
    let team = Uuid::new_v4();

    toggle_follow(&mut edges, user, team, TargetType::Team);
    toggle_follow(&mut edges, user, team, TargetType::Team);
    toggle_follow(&mut edges, user, team, TargetType::Team);
    assert_eq!(edges.len(), 1);
}

#[test]
fn toggling_one_edge_leaves_others_alone() {
    let mut edges: Vec<SocialConnection> = Vec::new();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let team = Uuid::new_v4();

    toggle_follow(&mut edges, alice, team, TargetType::Team);
    toggle_follow(&mut edges, bob, team, TargetType::Team);
    toggle_follow(&mut edges, alice, bob, TargetType::User);

    // Alice unfollows the team: her user edge and Bob's edge remain.
    toggle_follow(&mut edges, alice, team, TargetType::Team);
    assert_eq!(edges.len(), 2);
    assert!(is_following(&edges, bob, team));
    assert!(is_following(&edges, alice, bob));
}

#[test]
fn counts_distinguish_followers_from_following() {
    let mut edges: Vec<SocialConnection> = Vec::new();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let carol = Uuid::new_v4();
    let team = Uuid::new_v4();

    toggle_follow(&mut edges, bob, alice, TargetType::User);
    toggle_follow(&mut edges, carol, alice, TargetType::User);
    toggle_follow(&mut edges, alice, team, TargetType::Team);

    assert_eq!(follower_count(&edges, alice), 2);
    assert_eq!(following_count(&edges, alice), 1);
    assert_eq!(follower_count(&edges, team), 1);
    assert_eq!(following_count(&edges, bob), 1);
    assert_eq!(follower_count(&edges, bob), 0);
}
