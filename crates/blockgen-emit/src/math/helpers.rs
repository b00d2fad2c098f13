//! Lua bodies of the shared math helpers.
//!
//! Each function returns a template for [`crate::HelperRegistry::provide`]: the helper's own name
//! is left as [`FUNCTION_NAME_PLACEHOLDER`], names of other helpers it calls are passed in.

use crate::registry::FUNCTION_NAME_PLACEHOLDER;

fn function(params: &str, body: &[&str]) -> Vec<String> {
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format!("function {}({})", FUNCTION_NAME_PLACEHOLDER, params));
    lines.extend(body.iter().map(|line| line.to_string()));
    lines.push("end".to_string());
    lines
}

pub const IS_PRIME: &str = "math_isPrime";
pub const SUM: &str = "math_sum";
pub const MIN: &str = "math_min";
pub const MAX: &str = "math_max";
pub const AVERAGE: &str = "math_average";
pub const MEDIAN: &str = "math_median";
pub const MODES: &str = "math_modes";
pub const STANDARD_DEVIATION: &str = "math_standard_deviation";
pub const RANDOM_LIST: &str = "math_random_list";

pub fn is_prime() -> Vec<String> {
    function(
        "n",
        &[
            "  if n == 2 or n == 3 then",
            "    return true",
            "  end",
            "  -- NaN, below 2, fractional, or a multiple of 2 or 3.",
            "  if not(n > 1) or n % 1 ~= 0 or n % 2 == 0 or n % 3 == 0 then",
            "    return false",
            "  end",
            "  -- Trial division by 6k - 1 and 6k + 1 up to sqrt(n).",
            "  for x = 6, math.sqrt(n) + 1.5, 6 do",
            "    if n % (x - 1) == 0 or n % (x + 1) == 0 then",
            "      return false",
            "    end",
            "  end",
            "  return true",
        ],
    )
}

pub fn sum() -> Vec<String> {
    function(
        "t",
        &[
            "  local result = 0",
            "  for _, v in ipairs(t) do",
            "    result = result + v",
            "  end",
            "  return result",
        ],
    )
}

pub fn min() -> Vec<String> {
    function(
        "t",
        &[
            "  if #t == 0 then",
            "    return 0",
            "  end",
            "  local result = math.huge",
            "  for _, v in ipairs(t) do",
            "    if v < result then",
            "      result = v",
            "    end",
            "  end",
            "  return result",
        ],
    )
}

pub fn max() -> Vec<String> {
    function(
        "t",
        &[
            "  if #t == 0 then",
            "    return 0",
            "  end",
            "  local result = -math.huge",
            "  for _, v in ipairs(t) do",
            "    if v > result then",
            "      result = v",
            "    end",
            "  end",
            "  return result",
        ],
    )
}

pub fn average(sum: &str) -> Vec<String> {
    let ret = format!("  return {}(t) / #t", sum);
    function("t", &["  if #t == 0 then", "    return 0", "  end", &ret])
}

/// Median of the numeric entries only.
pub fn median() -> Vec<String> {
    function(
        "t",
        &[
            "  if #t == 0 then",
            "    return 0",
            "  end",
            "  local temp = {}",
            "  for _, v in ipairs(t) do",
            "    if type(v) == \"number\" then",
            "      table.insert(temp, v)",
            "    end",
            "  end",
            "  table.sort(temp)",
            "  if #temp % 2 == 0 then",
            "    return (temp[#temp / 2] + temp[(#temp / 2) + 1]) / 2",
            "  else",
            "    return temp[math.ceil(#temp / 2)]",
            "  end",
        ],
    )
}

/// Every value tied for the highest count, as a table.
pub fn modes() -> Vec<String> {
    function(
        "t",
        &[
            "  local counts = {}",
            "  for _, v in ipairs(t) do",
            "    if counts[v] == nil then",
            "      counts[v] = 1",
            "    else",
            "      counts[v] = counts[v] + 1",
            "    end",
            "  end",
            "  local biggestCount = 0",
            "  for _, v in pairs(counts) do",
            "    if v > biggestCount then",
            "      biggestCount = v",
            "    end",
            "  end",
            "  local temp = {}",
            "  for k, v in pairs(counts) do",
            "    if v == biggestCount then",
            "      table.insert(temp, k)",
            "    end",
            "  end",
            "  return temp",
        ],
    )
}

/// Sample standard deviation; NaN for fewer than two numbers.
pub fn standard_deviation(sum: &str) -> Vec<String> {
    let mean = format!("  m = #t == 0 and 0 or {}(t) / #t", sum);
    function(
        "t",
        &[
            "  local m",
            "  local vm",
            "  local total = 0",
            "  local count = 0",
            "  local result",
            &mean,
            "  for _, v in ipairs(t) do",
            "    if type(v) == 'number' then",
            "      vm = v - m",
            "      total = total + (vm * vm)",
            "      count = count + 1",
            "    end",
            "  end",
            "  result = math.sqrt(total / (count - 1))",
            "  return result",
        ],
    )
}

pub fn random_list() -> Vec<String> {
    function(
        "t",
        &[
            "  if #t == 0 then",
            "    return nil",
            "  end",
            "  return t[math.random(#t)]",
        ],
    )
}
