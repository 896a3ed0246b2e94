//! Core data model: elements being sorted and the algorithm selector.

/// Stable identity of an element, assigned once at sequence creation.
///
/// The id never changes as the element moves positions, which lets a renderer
/// animate identity-based motion even though the engine only exchanges which
/// element occupies which position.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u32);

/// Visual state of an element at one instant of the trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementState {
    Default,
    Comparing,
    Swapping,
    Sorted,
}

/// One element of the sequence being sorted.
///
/// `id` and `value` are immutable once created; sorting only changes which
/// position holds which element. State changes are expressed by deriving a new
/// `Element` via [`Element::with_state`], never by mutating in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub value: u32,
    pub state: ElementState,
}

impl Element {
    /// New element in the default visual state.
    pub fn new(id: ElementId, value: u32) -> Self {
        Self {
            id,
            value,
            state: ElementState::Default,
        }
    }

    /// Derived clone with the state overridden; `id` and `value` travel along.
    pub fn with_state(self, state: ElementState) -> Self {
        Self { state, ..self }
    }
}

/// Closed set of supported sorting algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Radix,
}

impl Algorithm {
    /// All supported algorithms, in presentation order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Radix,
    ];

    /// Parse a string selector; `None` for anything outside the closed set.
    pub fn from_selector(s: &str) -> Option<Self> {
        match s {
            "bubble" => Some(Self::Bubble),
            "selection" => Some(Self::Selection),
            "insertion" => Some(Self::Insertion),
            "merge" => Some(Self::Merge),
            "quick" => Some(Self::Quick),
            "heap" => Some(Self::Heap),
            "radix" => Some(Self::Radix),
            _ => None,
        }
    }

    /// Canonical string selector for this algorithm.
    pub fn selector(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Radix => "radix",
        }
    }

    /// Static metadata (display name, description, complexity).
    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            Self::Bubble => &BUBBLE_INFO,
            Self::Selection => &SELECTION_INFO,
            Self::Insertion => &INSERTION_INFO,
            Self::Merge => &MERGE_INFO,
            Self::Quick => &QUICK_INFO,
            Self::Heap => &HEAP_INFO,
            Self::Radix => &RADIX_INFO,
        }
    }
}

/// Broad family an algorithm belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Category {
    Comparison,
    DivideAndConquer,
    NonComparison,
}

/// Best/average/worst-case time complexity, as display strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TimeComplexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

/// Display metadata for one algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub time: TimeComplexity,
    pub space: &'static str,
    pub category: Category,
}

static BUBBLE_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    description: "A simple sorting algorithm that repeatedly steps through the list, \
                  compares adjacent elements and swaps them if they are in the wrong order.",
    time: TimeComplexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space: "O(1)",
    category: Category::Comparison,
};

static SELECTION_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    description: "Finds the minimum element from the unsorted portion and places it at \
                  the beginning. Simple but inefficient for large datasets.",
    time: TimeComplexity {
        best: "O(n²)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space: "O(1)",
    category: Category::Comparison,
};

static INSERTION_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    description: "Builds the final sorted array one item at a time. Very efficient for \
                  small datasets and nearly sorted arrays.",
    time: TimeComplexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space: "O(1)",
    category: Category::Comparison,
};

static MERGE_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    description: "A divide-and-conquer algorithm that divides the array into halves, \
                  sorts them separately, and then merges them back together.",
    time: TimeComplexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n log n)",
    },
    space: "O(n)",
    category: Category::DivideAndConquer,
};

static QUICK_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    description: "A highly efficient divide-and-conquer algorithm that selects a pivot \
                  element and partitions the array around it.",
    time: TimeComplexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n²)",
    },
    space: "O(log n)",
    category: Category::DivideAndConquer,
};

static HEAP_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Heap Sort",
    description: "Uses a binary heap data structure to sort elements. Builds a max-heap \
                  and repeatedly extracts the maximum element.",
    time: TimeComplexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n log n)",
    },
    space: "O(1)",
    category: Category::Comparison,
};

static RADIX_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Radix Sort",
    description: "A non-comparative sorting algorithm that sorts integers by processing \
                  individual digits. Works by sorting digit by digit.",
    time: TimeComplexity {
        best: "O(nk)",
        average: "O(nk)",
        worst: "O(nk)",
    },
    space: "O(n + k)",
    category: Category::NonComparison,
};
