use structures_avl::{print_tree, AvlTree, TreeError};

#[test]
fn avl_smoke_matrix() {
    let mut tree = AvlTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.size(), 0);

    for value in [5, 3, 8, 1, 4, 7, 9] {
        tree.insert(value).unwrap();
        tree.assert_valid().unwrap();
    }

    assert!(!tree.is_empty());
    assert_eq!(tree.size(), 7);
    assert!(tree.contains(&4));
    assert!(!tree.contains(&6));
    assert_eq!(tree.in_order().as_slice(), &[1, 3, 4, 5, 7, 8, 9]);

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.height(), 0);
}

#[test]
fn avl_right_rotation_scenario_matrix() {
    // Ascending inserts overload the right spine: inserting 30 triggers a
    // single rotation at the node holding 10 and promotes 20 to the root.
    let mut tree = AvlTree::new();
    tree.insert(10).unwrap();
    tree.insert(20).unwrap();
    assert_eq!(tree.height(), 2);
    tree.insert(30).unwrap();
    tree.assert_valid().unwrap();

    assert_eq!(tree.height(), 2);
    assert_eq!(tree.pre_order().as_slice(), &[20, 10, 30]);
    assert_eq!(tree.in_order().as_slice(), &[10, 20, 30]);
    assert_eq!(tree.post_order().as_slice(), &[10, 30, 20]);
}

#[test]
fn avl_left_rotation_mirror_scenario_matrix() {
    // Descending inserts: mirror case, same resulting shape.
    let mut tree = AvlTree::new();
    tree.insert(30).unwrap();
    tree.insert(20).unwrap();
    tree.insert(10).unwrap();
    tree.assert_valid().unwrap();

    assert_eq!(tree.height(), 2);
    assert_eq!(tree.pre_order().as_slice(), &[20, 10, 30]);
    assert_eq!(tree.in_order().as_slice(), &[10, 20, 30]);
}

#[test]
fn avl_double_rotation_scenarios_matrix() {
    // Left-right case.
    let mut tree = AvlTree::new();
    tree.insert(30).unwrap();
    tree.insert(10).unwrap();
    tree.insert(20).unwrap();
    tree.assert_valid().unwrap();
    assert_eq!(tree.pre_order().as_slice(), &[20, 10, 30]);

    // Right-left case.
    let mut tree = AvlTree::new();
    tree.insert(10).unwrap();
    tree.insert(30).unwrap();
    tree.insert(20).unwrap();
    tree.assert_valid().unwrap();
    assert_eq!(tree.pre_order().as_slice(), &[20, 10, 30]);
}

#[test]
fn avl_remove_root_scenario_matrix() {
    // Perfectly balanced 7-node tree; removing the root value swaps in
    // the in-order successor (50) and keeps both invariants.
    let mut tree = AvlTree::new();
    for value in [40, 20, 60, 10, 30, 50, 70] {
        tree.insert(value).unwrap();
    }
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.pre_order().as_slice(), &[40, 20, 10, 30, 60, 50, 70]);

    assert_eq!(tree.remove(&40).unwrap(), 40);
    tree.assert_valid().unwrap();

    assert_eq!(tree.size(), 6);
    assert!(!tree.contains(&40));
    assert_eq!(tree.in_order().as_slice(), &[10, 20, 30, 50, 60, 70]);
    assert_eq!(tree.pre_order().as_slice(), &[50, 20, 10, 30, 60, 70]);
}

#[test]
fn avl_remove_cases_matrix() {
    let mut tree = AvlTree::new();
    for value in [40, 20, 60, 10, 30, 50, 70, 5] {
        tree.insert(value).unwrap();
    }

    // Leaf removal that forces a rotation at 20 on the unwind.
    assert_eq!(tree.remove(&30).unwrap(), 30);
    tree.assert_valid().unwrap();
    assert_eq!(tree.remove(&5).unwrap(), 5);
    tree.assert_valid().unwrap();
    // One child: 10 only holds 20 now, which splices into its slot.
    assert_eq!(tree.remove(&10).unwrap(), 10);
    tree.assert_valid().unwrap();
    assert_eq!(tree.in_order().as_slice(), &[20, 40, 50, 60, 70]);

    // Drain completely; every step must stay balanced.
    for value in [50, 70, 20, 60, 40] {
        assert_eq!(tree.remove(&value).unwrap(), value);
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.remove(&1), Err(TreeError::EmptyTree));
}

#[test]
fn avl_remove_rebalances_ancestors_matrix() {
    // Removing from the shallow side forces a rotation on the unwind.
    let mut tree = AvlTree::new();
    for value in [20, 10, 30, 40] {
        tree.insert(value).unwrap();
    }
    assert_eq!(tree.remove(&10).unwrap(), 10);
    tree.assert_valid().unwrap();
    assert_eq!(tree.pre_order().as_slice(), &[30, 20, 40]);
    assert_eq!(tree.height(), 2);
}

#[test]
fn avl_error_paths_leave_tree_untouched_matrix() {
    let mut tree: AvlTree<i32> = AvlTree::new();
    assert_eq!(tree.remove(&1), Err(TreeError::EmptyTree));

    for value in [2, 1, 3] {
        tree.insert(value).unwrap();
    }
    let before = tree.pre_order();

    assert_eq!(tree.insert(2), Err(TreeError::DuplicateValue));
    assert_eq!(tree.remove(&9), Err(TreeError::ValueNotFound));
    tree.assert_valid().unwrap();
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.pre_order().as_slice(), before.as_slice());
}

#[test]
fn avl_traversal_lengths_matrix() {
    let mut tree = AvlTree::new();
    for value in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
        tree.insert(value).unwrap();
    }

    let pre = tree.pre_order();
    let ino = tree.in_order();
    let post = tree.post_order();
    assert_eq!(pre.size(), tree.size());
    assert_eq!(ino.size(), tree.size());
    assert_eq!(post.size(), tree.size());

    let mut pre: Vec<i32> = pre.as_slice().to_vec();
    let mut post: Vec<i32> = post.as_slice().to_vec();
    pre.sort_unstable();
    post.sort_unstable();
    assert_eq!(pre, ino.as_slice());
    assert_eq!(post, ino.as_slice());
}

#[test]
fn avl_ladder_insert_delete_matrix() {
    let mut tree = AvlTree::new();

    for i in 0..300 {
        tree.insert(i).unwrap();
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 300);
    // 300 nodes fit in 9 levels at best; AVL guarantees less than 1.45x.
    assert!(tree.height() <= 12);

    for i in (0..300).step_by(3) {
        assert_eq!(tree.remove(&i).unwrap(), i);
        tree.assert_valid().unwrap();
    }

    for i in 0..300 {
        assert_eq!(tree.contains(&i), i % 3 != 0);
    }
}

#[test]
fn avl_print_tree_matrix() {
    let mut tree = AvlTree::new();
    assert_eq!(print_tree(&tree), "(empty)");

    tree.insert(10).unwrap();
    tree.insert(20).unwrap();
    tree.insert(30).unwrap();

    let rendered = print_tree(&tree);
    assert_eq!(
        rendered,
        "20 (h=2)\n├─ L: 10 (h=1)\n└─ R: 30 (h=1)"
    );
}
