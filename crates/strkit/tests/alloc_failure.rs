//! Allocation failure is injected through a global allocator that refuses
//! requests on the current thread once a budget is spent. Live allocations
//! are counted per thread so leaks show up as a non-zero balance.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
    ptr,
};

use strkit::{TextError, join, repeat_copy, split, uppercase_copy};

struct FaultInjectingAlloc;

thread_local! {
    static BUDGET: Cell<Option<usize>> = const { Cell::new(None) };
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for FaultInjectingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let refuse = BUDGET
            .try_with(|budget| match budget.get() {
                Some(0) => true,
                Some(left) => {
                    budget.set(Some(left - 1));
                    false
                }
                None => false,
            })
            .unwrap_or(false);
        if refuse {
            return ptr::null_mut();
        }

        let block = unsafe { System.alloc(layout) };
        if !block.is_null() {
            let _ = LIVE.try_with(|live| live.set(live.get() + 1));
        }
        block
    }

    unsafe fn dealloc(&self, block: *mut u8, layout: Layout) {
        let _ = LIVE.try_with(|live| live.set(live.get() - 1));
        unsafe { System.dealloc(block, layout) }
    }
}

#[global_allocator]
static GLOBAL: FaultInjectingAlloc = FaultInjectingAlloc;

fn live() -> isize {
    LIVE.with(Cell::get)
}

/// Run `f` allowing at most `budget` allocations on this thread.
fn with_budget<R>(budget: usize, f: impl FnOnce() -> R) -> R {
    BUDGET.with(|b| b.set(Some(budget)));
    let result = f();
    BUDGET.with(|b| b.set(None));
    result
}

/// Touch every logging callsite on the failure and success paths once, so
/// that any one-time registration happens outside the measured window.
fn warm_up() {
    let _ = with_budget(0, || uppercase_copy("x"));
    let _ = split("a,b", b',');
    let _ = join(&["a", "b"], b',');
}

#[test]
fn split_releases_everything_when_a_token_allocation_fails() {
    warm_up();
    // One allocation for the list, then one per (non-empty) token.
    let text = "alpha,beta,gamma,delta";
    let allocations = 5;

    for budget in 0..allocations {
        let before = live();
        let result = with_budget(budget, || split(text, b','));
        assert!(
            matches!(result, Err(TextError::Alloc { .. })),
            "budget {budget}: {result:?}"
        );
        drop(result);
        assert_eq!(live(), before, "leak after failing at allocation {budget}");
    }

    let before = live();
    let tokens = with_budget(allocations, || split(text, b','))
        .expect("enough budget")
        .expect("input present");
    assert_eq!(tokens, ["alpha", "beta", "gamma", "delta"]);
    drop(tokens);
    assert_eq!(live(), before);
}

#[test]
fn failed_copy_reports_instead_of_aborting() {
    warm_up();
    let before = live();
    let result = with_budget(0, || uppercase_copy("abc"));
    assert!(matches!(result, Err(TextError::Alloc { requested: 3, .. })));
    assert_eq!(live(), before);
}

#[test]
fn failed_join_leaves_nothing_behind() {
    warm_up();
    let before = live();
    let result = with_budget(0, || join(&["a", "b"], b'-'));
    assert!(matches!(result, Err(TextError::Alloc { requested: 3, .. })));
    assert_eq!(live(), before);
}

#[test]
fn oversized_result_never_reaches_the_allocator() {
    warm_up();
    let before = live();
    // Any allocation attempt would be refused and show up as `Alloc`.
    let result = with_budget(0, || repeat_copy("ab", isize::MAX));
    assert_eq!(result, Err(TextError::CapacityOverflow));
    assert_eq!(live(), before);
}
