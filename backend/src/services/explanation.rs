//! Markdown shown under the figure. Rendered client-side with MathJax.

use crate::models::Scheme;

const MODEL_SKETCH: &str = r"
### Model sketch
Let $C(n)$ be the *Collatz map*
$$
C(n)=\begin{cases}
\tfrac{n}{2}, & n\equiv0\pmod2,\\[4pt]
3n+1, & n\equiv1\pmod2.
\end{cases}
$$
For a chosen start $n_0$, we iterate $n_{k+1}=C(n_k)$ until reaching $1$.

* **2-D turtle rule**: at each step the heading rotates by $\pm\theta$ and
  the step length scales like $1/\ln(n_{k+1})$.
* **Vertical axis**: climbs a constant $\Delta z$ each iteration, so overall
  height encodes the *stopping time*.
";

const TERNARY_NOTE: &str = r"
### Ternary variant
$$
T(n)=\begin{cases}
\tfrac{n}{3}, & n\equiv0\pmod3,\\[4pt]
\left\lfloor\tfrac{4n+1}{3}\right\rfloor, & n\equiv1\pmod3,\\[4pt]
\left\lfloor\tfrac{2n+1}{3}\right\rfloor, & n\equiv2\pmod3.
\end{cases}
$$
The third residue class turns by $+\theta/2$. This map is *not* known to
reach $1$ from every start; orbits that exceed the step cap are cut short.
";

/// Explanation panel for the given scheme.
pub fn explanation_markdown(scheme: Scheme) -> String {
    match scheme {
        Scheme::Binary => MODEL_SKETCH.to_string(),
        Scheme::Ternary => format!("{}{}", MODEL_SKETCH, TERNARY_NOTE),
    }
}
